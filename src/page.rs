use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::dom::{Document, HtmlDocument};
use crate::view::CHOSEN_YEAR_ID;

const CSS: &str = r#"
body { font-family: monospace; background: #fafafa; color: #222; }
#chosenYear { font-size: 1.4em; margin: 0.5em 0; }
.yearsSelectBox { margin-bottom: 1em; }
.item { display: inline-block; vertical-align: top; margin: 0 1.5em 1.5em 0; }
.month { font-weight: bold; margin-bottom: 0.3em; }
.calendar ul { list-style: none; margin: 0; padding: 0; width: 25em; }
.calendar li { display: inline-block; width: 3.3em; text-align: center; padding: 0.15em 0; }
.weekdays li { color: #666; }
.saturday { color: #2a6fdb; }
.sunday { color: #d0342c; }
.holiday { color: #c47f00; font-weight: bold; }
"#;

/// Document holding the year label and an empty calendar container.
pub fn page_document(container_id: &str) -> HtmlDocument {
    let mut doc = HtmlDocument::default();
    let root = doc.root();

    let label = doc.create_element("div", None);
    doc.set_attribute(label, "id", CHOSEN_YEAR_ID);
    doc.append(root, label);

    let container = doc.create_element("div", None);
    doc.set_attribute(container, "id", container_id);
    doc.append(root, container);

    doc
}

pub fn render_page(title: &str, doc: &HtmlDocument) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { (title) }
                (PreEscaped(doc.inner_html(doc.root())))
            }
        }
    }
}
