//! Day categories and the public-holiday calendar.
//!
//! This module defines the category a shift's hours are billed under and
//! the holiday calendar consulted during classification.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category a portion of a shift is billed under.
///
/// Categories select the applicable rate: either a rate tier group (tiered
/// billing) or a flat per-category employee rate. `Weeknight` is never
/// produced by date classification alone; it arises when weekday evening
/// hours are split off at the weeknight threshold, or when tiers are
/// configured directly against it.
///
/// # Example
///
/// ```
/// use billing_engine::models::DayCategory;
///
/// let category = DayCategory::PublicHoliday;
/// assert_eq!(category.to_string(), "Public Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Monday through Friday, before the weeknight threshold.
    Weekday,
    /// Weekday hours at or after the weeknight threshold.
    Weeknight,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A date in the public-holiday calendar, regardless of weekday.
    PublicHoliday,
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Weekday => write!(f, "Weekday"),
            DayCategory::Weeknight => write!(f, "Weeknight"),
            DayCategory::Saturday => write!(f, "Saturday"),
            DayCategory::Sunday => write!(f, "Sunday"),
            DayCategory::PublicHoliday => write!(f, "Public Holiday"),
        }
    }
}

/// The set of public-holiday dates consulted during day classification.
///
/// Holidays are global calendar dates with no company scoping and no
/// recurrence rules; membership is the only query. The calendar is fetched
/// once per batch request and shared across all shift calculations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of dates, deduplicating as it goes.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Returns true when the given date is a public holiday.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_engine::models::HolidayCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
    /// let calendar = HolidayCalendar::from_dates([christmas]);
    ///
    /// assert!(calendar.is_holiday(christmas));
    /// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
    /// ```
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true when the calendar contains no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
