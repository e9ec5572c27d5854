//! Reporting period model.
//!
//! This module contains the [`BillingPeriod`] type that defines the date
//! range a batch billing run covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reporting date range for batch billing.
///
/// Shifts are billed for one employee over one period; shifts dated
/// outside the period are excluded from the run. Public holidays are not
/// part of the period, they come from the global holiday calendar.
///
/// # Example
///
/// ```
/// use billing_engine::models::BillingPeriod;
/// use chrono::NaiveDate;
///
/// let period = BillingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl BillingPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
