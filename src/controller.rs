use chrono::Datelike;
use std::ops::Range;

use crate::clock::Clock;
use crate::error::{Error, ErrorKind, Result};
use crate::month::{MonthContext, MAX_YEAR, MIN_YEAR};
use crate::render::{render_month, RenderedMonth};

pub const MAX_MONTH_COUNT: u32 = 12;

pub const DEFAULT_CONTAINER_ID: &str = "calendar";

/// Raw calendar options as passed by the caller.
/// Nothing here is validated; see [`Settings::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub id: String,
    pub month: Option<i64>,
    pub year: Option<i64>,
    pub count: Option<i64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            id: DEFAULT_CONTAINER_ID.to_owned(),
            month: None,
            year: None,
            count: None,
        }
    }
}

impl Options {
    pub fn new(id: &str, count: Option<i64>, month: Option<i64>, year: Option<i64>) -> Self {
        Options {
            id: id.to_owned(),
            month,
            year,
            count,
        }
    }

    pub fn with_year(mut self, year: Option<i64>) -> Self {
        self.year = year;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub container_id: String,
    pub start: MonthContext,
    pub month_count: u32,
}

impl Settings {
    /// Out of range values never fail, they fall back to the clock's current
    /// month and year, and to a single month.
    pub fn resolve<C: Clock>(options: &Options, clock: &C) -> Result<Settings> {
        let today = clock.today();

        let month = match options.month {
            Some(m) if (0..=11).contains(&m) => m as u32,
            other => {
                log::debug!("month {:?} replaced by current month", other);
                today.month0()
            }
        };

        let year = match options.year {
            Some(y) if (MIN_YEAR as i64..=MAX_YEAR as i64).contains(&y) => y as i32,
            other => {
                log::debug!("year {:?} replaced by current year", other);
                today.year()
            }
        };

        let month_count = match options.count {
            Some(c) if (1..=MAX_MONTH_COUNT as i64).contains(&c) => c as u32,
            other => {
                log::debug!("month count {:?} replaced by 1", other);
                1
            }
        };

        Ok(Settings {
            container_id: options.id.clone(),
            start: MonthContext::new(year, month)?,
            month_count,
        })
    }
}

/// The month displayed at position `step`. Step zero is the start month itself.
pub fn advance(ctx: &MonthContext, step: u32) -> Result<MonthContext> {
    if step == 0 {
        Ok(*ctx)
    } else {
        ctx.succ()
    }
}

pub fn year_range() -> Range<i32> {
    MIN_YEAR..MAX_YEAR
}

/// Everything the presentation layer needs to draw one calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarModel {
    pub container_id: String,
    pub selected_year: i32,
    pub years: Range<i32>,
    pub months: Vec<RenderedMonth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unconfigured,
    Configured,
    Rendered,
}

pub struct Controller<C: Clock> {
    clock: C,
    invocation: Option<Options>,
    settings: Option<Settings>,
    state: State,
}

impl<C: Clock> Controller<C> {
    pub fn new(clock: C) -> Self {
        Controller {
            clock,
            invocation: None,
            settings: None,
            state: State::Unconfigured,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn configure(&mut self, options: Options) -> Result<&Settings> {
        let settings = Settings::resolve(&options, &self.clock)?;
        self.invocation = Some(options);
        self.state = State::Configured;
        Ok(self.settings.insert(settings))
    }

    pub fn render(&mut self) -> Result<CalendarModel> {
        let settings = self
            .settings
            .as_ref()
            .ok_or_else(|| Error::from(ErrorKind::NotConfigured))?;

        let mut months = Vec::with_capacity(settings.month_count as usize);
        let mut ctx = settings.start;
        for step in 0..settings.month_count {
            ctx = advance(&ctx, step)?;
            months.push(render_month(&ctx));
        }

        log::debug!(
            "rendered {} month(s) from {} {}",
            months.len(),
            settings.start.name(),
            settings.start.year()
        );

        let model = CalendarModel {
            container_id: settings.container_id.clone(),
            selected_year: settings.start.year(),
            years: year_range(),
            months,
        };
        self.state = State::Rendered;

        Ok(model)
    }

    pub fn render_calendar(&mut self, options: Options) -> Result<CalendarModel> {
        self.configure(options)?;
        self.render()
    }

    /// Renders again for `year`, keeping month and count of the original invocation.
    pub fn on_year_change(&mut self, year: Option<i64>) -> Result<CalendarModel> {
        let options = self
            .invocation
            .clone()
            .ok_or_else(|| Error::from(ErrorKind::NotConfigured))?
            .with_year(year);

        self.render_calendar(options)
    }

    /// Entry point for the year selector, which hands over its raw value.
    pub fn on_year_selected(&mut self, value: &str) -> Result<CalendarModel> {
        let year = match value.trim().parse::<i64>() {
            Ok(year) => Some(year),
            Err(e) => {
                log::warn!("Ignoring selected year '{}': {}", value, e);
                None
            }
        };

        self.on_year_change(year)
    }
}
