//! Embedded table of Armenian holidays, observances and seasons.
//!
//! Entries are keyed by zero-based month and day of month only, so every
//! entry applies to every year.

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HolidayStatus {
    #[display(fmt = "National holiday")]
    NationalHoliday,
    #[display(fmt = "Observance")]
    Observance,
    #[display(fmt = "Season")]
    Season,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEntry {
    pub month: u32,
    pub day: u32,
    /// Weekday the entry fell on when the table was compiled. Informational
    /// only, it is never checked against the actual weekday.
    pub weekday_label: &'static str,
    pub title: &'static str,
    pub status: HolidayStatus,
}

const fn entry(
    month: u32,
    day: u32,
    weekday_label: &'static str,
    title: &'static str,
    status: HolidayStatus,
) -> HolidayEntry {
    HolidayEntry {
        month,
        day,
        weekday_label,
        title,
        status,
    }
}

use HolidayStatus::*;

pub static HOLIDAYS: &[HolidayEntry] = &[
    entry(0, 1, "Monday", "New Year's Day", NationalHoliday),
    entry(0, 2, "Tuesday", "New Year's Day (Day 2)", NationalHoliday),
    entry(0, 3, "Wednesday", "New Year's Day (Day 3)", NationalHoliday),
    entry(0, 4, "Thursday", "New Year's Day (Day 4)", NationalHoliday),
    entry(0, 5, "Friday", "Armenian Christmas Eve", NationalHoliday),
    entry(0, 6, "Saturday", "Armenian Christmas Day", NationalHoliday),
    entry(0, 28, "Sunday", "Army Day", NationalHoliday),
    entry(1, 6, "Tuesday", "Translators' Day", Observance),
    entry(1, 8, "Thursday", "Feast of Saint Vartan", Observance),
    entry(1, 14, "Wednesday", "Valentine's Day", Observance),
    entry(1, 14, "Wednesday", "Valentine's Day", Observance),
    entry(2, 8, "Thursday", "International Women's Day", NationalHoliday),
    entry(2, 20, "Tuesday", "March equinox", Season),
    entry(2, 30, "Friday", "Good Friday", Observance),
    entry(2, 31, "Saturday", "Holy Saturday", Observance),
    entry(3, 1, "Sunday", "Easter Sunday", NationalHoliday),
    entry(3, 2, "Monday", "Easter Monday", Observance),
    entry(3, 7, "Saturday", "Motherhood and Beauty Day", Observance),
    entry(3, 24, "Tuesday", "Genocide Remembrance Day", NationalHoliday),
    entry(4, 1, "Tuesday", "Labour Day/May Day", NationalHoliday),
    entry(4, 8, "Tuesday", "Congress", Observance),
    entry(4, 9, "Wednesday", "Victory and Peace Day", NationalHoliday),
    entry(4, 28, "Monday", "Republic Day", NationalHoliday),
    entry(5, 1, "Friday", "Children's Day", Observance),
    entry(5, 17, "Sunday", "Fathers' Day", Observance),
    entry(5, 21, "Thursday", "June Solstice", Season),
    entry(6, 5, "Thursday", "Constitution Day", NationalHoliday),
    entry(6, 8, "Sunday", "Vardavar", NationalHoliday),
    entry(8, 1, "Saturday", "Knowledge and Literature Day", Observance),
    entry(8, 21, "Friday", "Independence Day", NationalHoliday),
    entry(8, 23, "Sunday", "September equinox", Season),
    entry(9, 31, "Wednesday", "Halloween", Observance),
    entry(11, 7, "Friday", "Spitak Remembrance Day", Observance),
    entry(11, 21, "Friday", "December Solstice", Season),
    entry(11, 31, "Monday", "New Year's Eve", NationalHoliday),
];

/// Every entry for the given zero-based month and day, duplicates included.
pub fn holidays_on(month: u32, day: u32) -> impl Iterator<Item = &'static HolidayEntry> {
    HOLIDAYS
        .iter()
        .filter(move |h| h.month == month && h.day == day)
}

pub fn is_holiday(month: u32, day: u32) -> bool {
    holidays_on(month, day).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_years_day_is_holiday() {
        assert!(is_holiday(0, 1));
        assert!(!is_holiday(0, 15));
    }

    #[test]
    fn lookup_needs_both_fields() {
        // 28th of January is Army Day, 28th of February is nothing
        assert!(is_holiday(0, 28));
        assert!(!is_holiday(1, 28));
        assert!(!is_holiday(7, 1));
    }

    #[test]
    fn duplicates_are_kept() {
        let valentines: Vec<_> = holidays_on(1, 14).collect();
        assert_eq!(valentines.len(), 2);
        assert!(valentines.iter().all(|h| h.title == "Valentine's Day"));
        assert_eq!(HOLIDAYS.len(), 35);
    }

    #[test]
    fn status_display() {
        assert_eq!(NationalHoliday.to_string(), "National holiday");
        assert_eq!(Season.to_string(), "Season");
        let eve = holidays_on(11, 31).next().unwrap();
        assert_eq!(eve.status, NationalHoliday);
    }
}
