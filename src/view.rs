use crate::classify::Classification;
use crate::controller::CalendarModel;
use crate::dom::{Document, ElementId};
use crate::error::{Error, ErrorKind, Result};
use crate::holiday::holidays_on;
use crate::month::DAYS_SHORT;
use crate::render::{DayCell, RenderedMonth};

/// Id of the optional element showing the selected year.
pub const CHOSEN_YEAR_ID: &str = "chosenYear";

/// Name of the page level handler the year selector calls on change.
pub const YEAR_HANDLER: &str = "onYearSelected";

/// Replaces the content of the model's container with the calendar.
pub fn mount<D: Document>(doc: &mut D, model: &CalendarModel) -> Result<()> {
    let container = doc.element_by_id(&model.container_id).ok_or_else(|| {
        Error::new(
            ErrorKind::MissingElement,
            &format!("no container with id '{}'", model.container_id),
        )
    })?;

    doc.clear_children(container);

    if let Some(label) = doc.element_by_id(CHOSEN_YEAR_ID) {
        doc.set_text(label, &format!("Year: {}", model.selected_year));
    }

    let select = year_select(doc, model);
    doc.append(container, select);

    for month in &model.months {
        let wrapper = month_wrapper(doc, month);
        doc.append(container, wrapper);
    }

    Ok(())
}

fn year_select<D: Document>(doc: &mut D, model: &CalendarModel) -> ElementId {
    let select = doc.create_element("select", Some("yearsSelectBox"));
    doc.set_attribute(select, "onChange", &format!("{}(this.value)", YEAR_HANDLER));

    for year in model.years.clone() {
        let option = doc.create_element("option", None);
        let value = year.to_string();
        doc.set_attribute(option, "value", &value);
        if year == model.selected_year {
            doc.set_attribute(option, "selected", "selected");
        }
        doc.set_text(option, &value);
        doc.append(select, option);
    }

    select
}

fn month_wrapper<D: Document>(doc: &mut D, month: &RenderedMonth) -> ElementId {
    let item = doc.create_element("div", Some("item"));

    let name = doc.create_element("div", Some("month"));
    doc.set_text(name, month.context.name());
    doc.append(item, name);

    let wrap = doc.create_element("div", Some("calendar-month"));
    let table = doc.create_element("div", Some("calendar"));

    let head = doc.create_element("ul", Some("weekdays"));
    for day in DAYS_SHORT.iter() {
        let li = doc.create_element("li", Some("day-item"));
        doc.set_text(li, day);
        doc.append(head, li);
    }
    doc.append(table, head);

    let days = doc.create_element("ul", Some("days"));
    for cell in month.cells() {
        let li = day_item(doc, month, cell);
        doc.append(days, li);
    }
    doc.append(table, days);

    doc.append(wrap, table);
    doc.append(item, wrap);
    item
}

fn day_item<D: Document>(doc: &mut D, month: &RenderedMonth, cell: &DayCell) -> ElementId {
    let li = doc.create_element("li", None);

    match cell {
        DayCell::Filler => {}
        DayCell::Day {
            classification: Classification::Weekday,
            label,
            ..
        } => doc.set_text(li, label),
        DayCell::Day {
            day_num,
            classification,
            label,
        } => {
            let span = doc.create_element("span", Some(classification.to_string().as_str()));
            doc.set_text(span, label);
            if let Some(holiday) = holidays_on(month.context.month(), *day_num).next() {
                doc.set_attribute(
                    span,
                    "title",
                    &format!("{} ({})", holiday.title, holiday.status),
                );
            }
            doc.append(li, span);
        }
    }

    li
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::controller::{Controller, Options};
    use crate::dom::HtmlDocument;
    use chrono::NaiveDate;

    fn controller() -> Controller<FixedClock> {
        Controller::new(FixedClock(NaiveDate::from_ymd_opt(2023, 8, 15).unwrap()))
    }

    fn reference_model(controller: &mut Controller<FixedClock>) -> CalendarModel {
        controller
            .render_calendar(Options::new("calendar", Some(12), Some(0), Some(2018)))
            .unwrap()
    }

    #[test]
    fn mounts_selector_and_months() {
        let mut doc = HtmlDocument::with_container("calendar");
        let model = reference_model(&mut controller());
        mount(&mut doc, &model).unwrap();

        let root = doc.root();
        let selects = doc.by_class(root, "yearsSelectBox");
        assert_eq!(selects.len(), 1);
        let options = doc.children(selects[0]);
        assert_eq!(options.len(), 180);
        assert_eq!(doc.text(options[0]), "1970");
        assert_eq!(doc.text(options[179]), "2149");
        assert_eq!(
            doc.attribute(selects[0], "onChange"),
            Some("onYearSelected(this.value)")
        );
        let selected: Vec<_> = options
            .iter()
            .filter(|o| doc.attribute(**o, "selected").is_some())
            .map(|o| doc.text(*o))
            .collect();
        assert_eq!(selected, vec!["2018"]);

        assert_eq!(doc.by_class(root, "item").len(), 12);
        let names: Vec<_> = doc
            .by_class(root, "month")
            .into_iter()
            .map(|m| doc.text(m).to_owned())
            .collect();
        assert_eq!(names[0], "January");
        assert_eq!(names[11], "December");
        assert_eq!(doc.by_class(root, "day-item").len(), 12 * 7);
    }

    #[test]
    fn day_cells_carry_classes() {
        let mut doc = HtmlDocument::with_container("calendar");
        let mut ctrl = controller();
        let model = ctrl
            .render_calendar(Options::new("calendar", Some(1), Some(0), Some(2018)))
            .unwrap();
        mount(&mut doc, &model).unwrap();

        let days = doc.by_class(doc.root(), "days")[0];
        let items = doc.children(days);
        assert_eq!(items.len(), 35);

        // Monday 1st: holiday span with tooltip
        let first = doc.children(items[0])[0];
        assert_eq!(doc.tag(first), "span");
        assert!(doc.has_class(first, "holiday"));
        assert_eq!(doc.text(first), "00001");
        assert_eq!(
            doc.attribute(first, "title"),
            Some("New Year's Day (National holiday)")
        );

        // Saturday 6th is a holiday too but shown as saturday
        let sixth = doc.children(items[5])[0];
        assert!(doc.has_class(sixth, "saturday"));
        assert!(doc.has_class(doc.children(items[6])[0], "sunday"));

        // plain weekday text sits directly in the list item
        assert!(doc.children(items[14]).is_empty());
        assert_eq!(doc.text(items[14]), "01111");

        // trailing filler after Wednesday 31st
        assert_eq!(doc.text(items[30]), "11111");
        assert!(items[31..]
            .iter()
            .all(|i| doc.text(*i).is_empty() && doc.children(*i).is_empty()));
    }

    #[test]
    fn remount_replaces_previous_output() {
        let mut doc = HtmlDocument::with_container("calendar");
        let label = doc.create_element("span", None);
        doc.set_attribute(label, "id", CHOSEN_YEAR_ID);
        let root = doc.root();
        doc.append(root, label);

        let mut ctrl = controller();
        let model = reference_model(&mut ctrl);
        mount(&mut doc, &model).unwrap();
        let first = doc.inner_html(root);

        let model = ctrl.on_year_selected("2019").unwrap();
        mount(&mut doc, &model).unwrap();
        assert_eq!(doc.by_class(root, "item").len(), 12);
        assert_eq!(doc.by_class(root, "yearsSelectBox").len(), 1);
        assert_eq!(doc.text(label), "Year: 2019");

        let model = ctrl.on_year_selected("2018").unwrap();
        mount(&mut doc, &model).unwrap();
        assert_eq!(doc.inner_html(root), first);
    }

    #[test]
    fn missing_container() {
        let mut doc = HtmlDocument::with_container("elsewhere");
        let model = reference_model(&mut controller());
        let err = mount(&mut doc, &model).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MissingElement));
    }
}
