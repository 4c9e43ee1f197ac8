use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;

use crate::error::{Error, ErrorKind, Result};

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 2150;

pub const DAYS_SHORT: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One calendar month. `month` is zero-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthContext {
    year: i32,
    month: u32,
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthContext {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let out_of_range =
            || Error::new(ErrorKind::DateOutOfRange, &format!("{}-{:02}", year, month + 1));

        if month > 11 {
            return Err(out_of_range());
        }

        let first = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or_else(out_of_range)?;

        // day zero of the following month
        let last = if month == 11 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 2, 1)
        }
        .and_then(|next| next.pred_opt())
        .ok_or_else(out_of_range)?;

        Ok(MonthContext {
            year,
            month,
            first,
            last,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }

    /// The month after this one, rolling over into the next year after December.
    pub fn succ(&self) -> Result<Self> {
        if self.month < 11 {
            MonthContext::new(self.year, self.month + 1)
        } else {
            MonthContext::new(self.year + 1, 0)
        }
    }
}

pub fn month_name(month: u32) -> &'static str {
    Month::from_u32(month + 1).map_or("", |m| m.name())
}

pub fn days_in_month(ctx: &MonthContext) -> u32 {
    ctx.last.day()
}

/// Weekday of `day` in `ctx`, Monday = 0 through Sunday = 6.
pub fn weekday_of(ctx: &MonthContext, day: u32) -> u32 {
    let sunday_based = (ctx.first.weekday().num_days_from_sunday() + day + 6) % 7;
    monday_based(sunday_based)
}

fn monday_based(sunday_based: u32) -> u32 {
    if sunday_based == 0 {
        6
    } else {
        sunday_based - 1
    }
}
