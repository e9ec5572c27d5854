//! Day classification logic.
//!
//! This module determines the day category for a shift's calendar date.
//! Classification is a pure function of the date and the public-holiday
//! calendar; the shift's time-of-day is never consulted, even for shifts
//! that cross midnight into a different kind of day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{DayCategory, HolidayCalendar};

/// Classifies a calendar date against the public-holiday calendar.
///
/// The checks apply in priority order: a date in the holiday calendar is
/// always [`DayCategory::PublicHoliday`], even when it falls on a
/// weekend; otherwise Sunday, then Saturday, then weekday.
///
/// This function never returns [`DayCategory::Weeknight`]; weeknight is a
/// billing category produced by splitting weekday evening hours, not a
/// property of the date.
///
/// # Arguments
///
/// * `date` - The calendar date to classify
/// * `holidays` - The public-holiday calendar
///
/// # Returns
///
/// The [`DayCategory`] for the date.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::classify_date;
/// use billing_engine::models::{DayCategory, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::from_dates([
///     NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
/// ]);
///
/// // 2025-10-06 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
/// assert_eq!(classify_date(monday, &holidays), DayCategory::Weekday);
///
/// // Christmas Day 2025 classifies as a public holiday
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// assert_eq!(classify_date(christmas, &holidays), DayCategory::PublicHoliday);
/// ```
pub fn classify_date(date: NaiveDate, holidays: &HolidayCalendar) -> DayCategory {
    if holidays.is_holiday(date) {
        return DayCategory::PublicHoliday;
    }

    match date.weekday() {
        Weekday::Sun => DayCategory::Sunday,
        Weekday::Sat => DayCategory::Saturday,
        _ => DayCategory::Weekday,
    }
}
