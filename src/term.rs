use itertools::Itertools;
use termion::{color, style};

use crate::binary::LABEL_WIDTH;
use crate::classify::Classification;
use crate::controller::CalendarModel;
use crate::month::DAYS_SHORT;
use crate::render::{DayCell, RenderedMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub colored: bool,
    pub column_spacing: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            colored: true,
            column_spacing: 1,
        }
    }
}

impl TextStyle {
    pub fn plain() -> Self {
        TextStyle {
            colored: false,
            ..TextStyle::default()
        }
    }
}

fn paint(text: &str, classification: Option<Classification>, text_style: TextStyle) -> String {
    match classification {
        Some(c) if !text_style.colored || !c.is_highlighted() => text.to_owned(),
        Some(Classification::Saturday) => {
            format!("{}{}{}", color::Fg(color::Blue), text, color::Fg(color::Reset))
        }
        Some(Classification::Sunday) => {
            format!("{}{}{}", color::Fg(color::Red), text, color::Fg(color::Reset))
        }
        Some(Classification::Holiday) => format!(
            "{}{}{}{}",
            style::Bold,
            color::Fg(color::Yellow),
            text,
            style::Reset
        ),
        _ => text.to_owned(),
    }
}

pub fn month_lines(month: &RenderedMonth, text_style: TextStyle) -> Vec<String> {
    let separator = " ".repeat(text_style.column_spacing);
    let mut lines = Vec::with_capacity(month.rows.len() + 2);

    let title = format!("{} {}", month.context.name(), month.context.year());
    lines.push(if text_style.colored {
        format!("{}{}{}", style::Bold, title, style::Reset)
    } else {
        title
    });

    let header = DAYS_SHORT
        .iter()
        .map(|day| format!("{:<width$}", day, width = LABEL_WIDTH))
        .join(&separator);
    lines.push(header.trim_end().to_owned());

    for row in &month.rows {
        let line = row
            .iter()
            .map(|cell| {
                let padded = match cell {
                    DayCell::Filler => " ".repeat(LABEL_WIDTH),
                    DayCell::Day { label, .. } => format!("{:<width$}", label, width = LABEL_WIDTH),
                };
                paint(&padded, cell.classification(), text_style)
            })
            .join(&separator);
        lines.push(line.trim_end().to_owned());
    }

    lines
}

pub fn render_text(model: &CalendarModel, text_style: TextStyle) -> String {
    let mut out = format!(
        "Year: {}  ({}-{})\n",
        model.selected_year,
        model.years.start,
        model.years.end - 1
    );

    for month in &model.months {
        out.push('\n');
        for line in month_lines(month, text_style) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}
