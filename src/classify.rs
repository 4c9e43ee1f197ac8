use derive_more::Display;

use crate::holiday::is_holiday;
use crate::month::{weekday_of, MonthContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Classification {
    #[display(fmt = "weekday")]
    Weekday,
    #[display(fmt = "saturday")]
    Saturday,
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "holiday")]
    Holiday,
}

impl Classification {
    pub fn is_highlighted(&self) -> bool {
        !matches!(self, Classification::Weekday)
    }
}

/// Weekend status takes precedence: a holiday on a Saturday is a `Saturday`.
pub fn classify(ctx: &MonthContext, day: u32) -> Classification {
    match weekday_of(ctx, day) {
        5 => Classification::Saturday,
        6 => Classification::Sunday,
        _ if is_holiday(ctx.month(), day) => Classification::Holiday,
        _ => Classification::Weekday,
    }
}
