use std::io::{self, Write};

use termion::{clear, cursor};

use crate::clock::Clock;
use crate::controller::{CalendarModel, Controller, Options};
use crate::error::Result;
use crate::events::{Cmd, Dispatcher, Event};
use crate::term::{render_text, TextStyle};

/// Interactive terminal calendar. Key presses play the part of the year selector.
pub struct App<C: Clock> {
    controller: Controller<C>,
    start_year: i32,
    model: CalendarModel,
    text_style: TextStyle,
    quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(mut controller: Controller<C>, options: Options) -> Result<Self> {
        let model = controller.render_calendar(options)?;

        Ok(App {
            controller,
            start_year: model.selected_year,
            model,
            text_style: TextStyle::default(),
            quit: false,
        })
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn model(&self) -> &CalendarModel {
        &self.model
    }

    pub fn quit(&self) -> bool {
        self.quit
    }

    fn select_year(&mut self, year: i32) -> Result<()> {
        let years = &self.model.years;
        let year = year.clamp(years.start, years.end - 1);
        if year != self.model.selected_year {
            self.model = self.controller.on_year_selected(&year.to_string())?;
        }
        Ok(())
    }

    pub fn handle(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::NextYear => self.select_year(self.model.selected_year + 1),
            Cmd::PrevYear => self.select_year(self.model.selected_year - 1),
            Cmd::StartYear => self.select_year(self.start_year),
            Cmd::Exit => {
                self.quit = true;
                Ok(())
            }
            Cmd::Noop => Ok(()),
        }
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}{}", clear::All, cursor::Goto(1, 1))?;
        for line in render_text(&self.model, self.text_style).lines() {
            write!(out, "{}\r\n", line)?;
        }
        write!(out, "\r\n[h/-] previous year  [l/+] next year  [t] start year  [q] quit\r\n")?;
        out.flush()
    }

    pub fn run<W: Write>(&mut self, dispatcher: Dispatcher, out: &mut W) -> Result<()> {
        self.draw(out)?;

        while !self.quit {
            match dispatcher.next() {
                Ok(Event::Input(key)) => {
                    self.handle(Cmd::from(key))?;
                    self.draw(out)?;
                }
                Ok(Event::InputClosed) | Err(_) => self.quit = true,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn app(year: i64) -> App<FixedClock> {
        let controller =
            Controller::new(FixedClock(NaiveDate::from_ymd_opt(2023, 8, 15).unwrap()));
        App::new(
            controller,
            Options::new("calendar", Some(12), Some(0), Some(year)),
        )
        .unwrap()
    }

    #[test]
    fn step_through_years() {
        let mut cal = app(2018);
        cal.handle(Cmd::NextYear).unwrap();
        cal.handle(Cmd::NextYear).unwrap();
        assert_eq!(cal.model().selected_year, 2020);
        assert_eq!(cal.model().months.len(), 12);
        assert_eq!(cal.model().months[0].context.year(), 2020);

        cal.handle(Cmd::PrevYear).unwrap();
        assert_eq!(cal.model().selected_year, 2019);

        cal.handle(Cmd::StartYear).unwrap();
        assert_eq!(cal.model().selected_year, 2018);
        assert!(!cal.quit());
        cal.handle(Cmd::Exit).unwrap();
        assert!(cal.quit());
    }

    #[test]
    fn stays_inside_selector_range() {
        let mut first = app(1970);
        first.handle(Cmd::PrevYear).unwrap();
        assert_eq!(first.model().selected_year, 1970);

        let mut last = app(2149);
        last.handle(Cmd::NextYear).unwrap();
        assert_eq!(last.model().selected_year, 2149);
    }

    #[test]
    fn draw_uses_raw_mode_line_endings() {
        let plain = app(2018).text_style(TextStyle::plain());
        let mut out = Vec::new();
        plain.draw(&mut out).unwrap();
        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("Year: 2018  (1970-2149)\r\n"));
        assert!(screen.contains("January 2018\r\n"));
        assert!(!screen.contains("2018\n"));
    }
}
