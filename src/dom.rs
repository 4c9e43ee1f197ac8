//! Minimal element tree the calendar view draws into.
//!
//! [`Document`] is the interface the view needs from a host page. [`HtmlDocument`]
//! implements it in memory and serializes to markup.

use maud::Escaper;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

pub trait Document {
    fn create_element(&mut self, tag: &str, class: Option<&str>) -> ElementId;
    fn append(&mut self, parent: ElementId, child: ElementId);
    fn element_by_id(&self, id: &str) -> Option<ElementId>;
    fn set_text(&mut self, element: ElementId, text: &str);
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);
    fn clear_children(&mut self, element: ElementId);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<ElementId>,
}

impl Node {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// Arena backed document. Detached elements stay in the arena but are never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    nodes: Vec<Node>,
    root: ElementId,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        HtmlDocument {
            nodes: vec![Node {
                tag: "div".to_owned(),
                attributes: Vec::new(),
                text: String::new(),
                children: Vec::new(),
            }],
            root: ElementId(0),
        }
    }
}

impl HtmlDocument {
    /// Document with an empty container element carrying `id`.
    pub fn with_container(id: &str) -> Self {
        let mut doc = HtmlDocument::default();
        let container = doc.create_element("div", None);
        doc.set_attribute(container, "id", id);
        doc.append(doc.root, container);
        doc
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn tag(&self, element: ElementId) -> &str {
        &self.nodes[element.0].tag
    }

    pub fn text(&self, element: ElementId) -> &str {
        &self.nodes[element.0].text
    }

    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.nodes[element.0].attribute(name)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        &self.nodes[element.0].children
    }

    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.attribute(element, "class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }

    /// All attached elements below `element`, depth first.
    pub fn descendants(&self, element: ElementId) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.children(element).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            found.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        found
    }

    pub fn by_class(&self, element: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(element)
            .into_iter()
            .filter(|e| self.has_class(*e, class))
            .collect()
    }

    /// Markup of the children of `element`.
    pub fn inner_html(&self, element: ElementId) -> String {
        let mut out = String::new();
        for child in self.children(element) {
            self.write_element(*child, &mut out);
        }
        out
    }

    pub fn outer_html(&self, element: ElementId) -> String {
        let mut out = String::new();
        self.write_element(element, &mut out);
        out
    }

    fn write_element(&self, element: ElementId, out: &mut String) {
        let node = &self.nodes[element.0];

        // Writing into a String never fails
        let _ = write!(out, "<{}", node.tag);
        for (name, value) in &node.attributes {
            let _ = write!(out, " {}=\"", name);
            let _ = Escaper::new(out).write_str(value);
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&node.tag.as_str()) {
            return;
        }

        let _ = Escaper::new(out).write_str(&node.text);
        for child in &node.children {
            self.write_element(*child, out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

impl Document for HtmlDocument {
    fn create_element(&mut self, tag: &str, class: Option<&str>) -> ElementId {
        let mut attributes = Vec::new();
        if let Some(class) = class {
            attributes.push(("class".to_owned(), class.to_owned()));
        }

        self.nodes.push(Node {
            tag: tag.to_owned(),
            attributes,
            text: String::new(),
            children: Vec::new(),
        });
        ElementId(self.nodes.len() - 1)
    }

    fn append(&mut self, parent: ElementId, child: ElementId) {
        self.nodes[parent.0].children.push(child);
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|e| self.attribute(*e, "id") == Some(id))
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.nodes[element.0].text = text.to_owned();
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let node = &mut self.nodes[element.0];
        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_owned(),
            None => node.attributes.push((name.to_owned(), value.to_owned())),
        }
    }

    fn clear_children(&mut self, element: ElementId) {
        self.nodes[element.0].children.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_serialize() {
        let mut doc = HtmlDocument::with_container("calendar");
        let container = doc.element_by_id("calendar").unwrap();

        let list = doc.create_element("ul", Some("days"));
        let item = doc.create_element("li", None);
        doc.set_text(item, "<00001>");
        doc.append(list, item);
        doc.append(container, list);

        assert_eq!(
            doc.inner_html(container),
            "<ul class=\"days\"><li>&lt;00001&gt;</li></ul>"
        );
        assert_eq!(doc.by_class(doc.root(), "days"), vec![list]);
    }

    #[test]
    fn clearing_detaches_children() {
        let mut doc = HtmlDocument::with_container("calendar");
        let container = doc.element_by_id("calendar").unwrap();
        let child = doc.create_element("span", Some("holiday"));
        doc.append(container, child);
        doc.clear_children(container);

        assert!(doc.children(container).is_empty());
        assert_eq!(doc.outer_html(container), "<div id=\"calendar\"></div>");
    }

    #[test]
    fn attributes_are_replaced_and_escaped() {
        let mut doc = HtmlDocument::default();
        let el = doc.create_element("li", Some("holiday"));
        doc.set_attribute(el, "title", "Congress");
        doc.set_attribute(el, "title", "\"Day\" & night");
        assert_eq!(
            doc.outer_html(el),
            "<li class=\"holiday\" title=\"&quot;Day&quot; &amp; night\"></li>"
        );
        assert!(doc.element_by_id("missing").is_none());
    }
}
