use crate::binary::{to_binary_padded, LABEL_WIDTH};
use crate::classify::{classify, Classification};
use crate::month::{days_in_month, weekday_of, MonthContext};

pub const COLUMNS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    Filler,
    Day {
        day_num: u32,
        classification: Classification,
        label: String,
    },
}

impl DayCell {
    pub fn label(&self) -> &str {
        match self {
            DayCell::Filler => "",
            DayCell::Day { label, .. } => label,
        }
    }

    pub fn day_num(&self) -> Option<u32> {
        match self {
            DayCell::Filler => None,
            DayCell::Day { day_num, .. } => Some(*day_num),
        }
    }

    pub fn classification(&self) -> Option<Classification> {
        match self {
            DayCell::Filler => None,
            DayCell::Day { classification, .. } => Some(*classification),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMonth {
    pub context: MonthContext,
    pub rows: Vec<Vec<DayCell>>,
}

impl RenderedMonth {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flatten()
    }
}

/// Lays out the days of `ctx` on a grid of seven columns, Monday first.
pub fn render_month(ctx: &MonthContext) -> RenderedMonth {
    let num_days = days_in_month(ctx);
    let offset = weekday_of(ctx, 1) as usize;
    let trailing = (COLUMNS - (offset + num_days as usize) % COLUMNS) % COLUMNS;

    let days = (1..=num_days).map(|day_num| DayCell::Day {
        day_num,
        classification: classify(ctx, day_num),
        label: to_binary_padded(day_num, LABEL_WIDTH),
    });

    let rows = std::iter::repeat_with(|| DayCell::Filler)
        .take(offset)
        .chain(days)
        .chain(std::iter::repeat_with(|| DayCell::Filler).take(trailing))
        .collect::<Vec<DayCell>>()
        .chunks(COLUMNS)
        .map(|row| row.to_vec())
        .collect();

    RenderedMonth {
        context: *ctx,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_seven_wide() {
        for month in 0..12 {
            let rendered = render_month(&MonthContext::new(2018, month).unwrap());
            assert!(rendered.rows.iter().all(|row| row.len() == COLUMNS));
            assert_eq!(
                rendered.cells().filter_map(DayCell::day_num).count() as u32,
                days_in_month(&rendered.context)
            );
        }
    }

    #[test]
    fn cells_sit_in_their_weekday_column() {
        let ctx = MonthContext::new(2018, 6).unwrap();
        let rendered = render_month(&ctx);
        for row in &rendered.rows {
            for (column, cell) in row.iter().enumerate() {
                if let Some(day) = cell.day_num() {
                    assert_eq!(weekday_of(&ctx, day) as usize, column);
                }
            }
        }
    }

    #[test]
    fn leading_and_trailing_filler() {
        // July 2018 starts on a Sunday and ends on a Tuesday
        let rendered = render_month(&MonthContext::new(2018, 6).unwrap());
        assert_eq!(rendered.rows.len(), 6);
        assert!(rendered.rows[0][..6].iter().all(|c| *c == DayCell::Filler));
        assert_eq!(rendered.rows[0][6].label(), "00001");
        assert_eq!(rendered.rows[5][1].label(), "11111");
        assert!(rendered.rows[5][2..].iter().all(|c| c.label().is_empty()));
    }

    #[test]
    fn month_without_filler() {
        // February 2021 starts on a Monday and has exactly four weeks
        let rendered = render_month(&MonthContext::new(2021, 1).unwrap());
        assert_eq!(rendered.rows.len(), 4);
        assert!(rendered.cells().all(|c| c.day_num().is_some()));
    }

    #[test]
    fn classifications_are_attached() {
        let rendered = render_month(&MonthContext::new(2018, 0).unwrap());
        let first = &rendered.rows[0][0];
        assert_eq!(first.day_num(), Some(1));
        assert_eq!(first.classification(), Some(Classification::Holiday));
        assert_eq!(
            rendered.rows[0][5].classification(),
            Some(Classification::Saturday)
        );
        assert_eq!(DayCell::Filler.classification(), None);
    }
}
