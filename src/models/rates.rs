//! Rate configuration rows for both billing paths.
//!
//! Two parallel rate systems feed billing output: company-wide tiered
//! rates ([`RateTier`]) and per-employee flat category rates
//! ([`EmployeeRate`]). Both are authored externally and fetched through
//! the store; this module defines the rows and their applicability rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DayCategory;

/// One band of a company's tiered rate configuration.
///
/// Tiers form ordered groups keyed by (company, shift type, day category);
/// a shift's hours are consumed against the group ascending by
/// `tier_order`. A tier with `hours_in_tier = None` absorbs all remaining
/// hours and must be the last tier of its group.
///
/// # Example
///
/// ```
/// use billing_engine::models::{DayCategory, RateTier};
/// use rust_decimal::Decimal;
///
/// let tier = RateTier {
///     company_id: "acme".to_string(),
///     shift_type: "standard".to_string(),
///     day_type: DayCategory::Weekday,
///     tier_order: 1,
///     hours_in_tier: Some(Decimal::new(80, 1)), // first 8 hours
///     rate_per_hour: 2500,
///     valid_from: None,
///     valid_to: None,
/// };
/// assert!(!tier.is_unbounded());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// The company the tier is configured for.
    pub company_id: String,
    /// The shift type the tier applies to.
    pub shift_type: String,
    /// The day category the tier applies to.
    pub day_type: DayCategory,
    /// Position of the tier within its group, ascending from 1.
    pub tier_order: u32,
    /// Hours this tier can absorb; `None` absorbs all remaining hours.
    pub hours_in_tier: Option<Decimal>,
    /// The rate for hours in this tier, in minor currency units per hour.
    pub rate_per_hour: i64,
    /// First date the tier applies on; `None` leaves the window open.
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    /// Last date the tier applies on; `None` leaves the window open.
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
}

impl RateTier {
    /// Returns true when the tier's validity window contains the date.
    ///
    /// The window is inclusive on both ends; a missing bound leaves that
    /// side open.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_engine::models::{DayCategory, RateTier};
    /// use chrono::NaiveDate;
    ///
    /// let tier = RateTier {
    ///     company_id: "acme".to_string(),
    ///     shift_type: "standard".to_string(),
    ///     day_type: DayCategory::Weekday,
    ///     tier_order: 1,
    ///     hours_in_tier: None,
    ///     rate_per_hour: 2500,
    ///     valid_from: NaiveDate::from_ymd_opt(2025, 1, 1),
    ///     valid_to: None,
    /// };
    ///
    /// assert!(tier.applies_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
    /// assert!(!tier.applies_on(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
    /// ```
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        let from_ok = self.valid_from.is_none_or(|from| from <= date);
        let to_ok = self.valid_to.is_none_or(|to| date <= to);
        from_ok && to_ok
    }

    /// Returns true when the tier absorbs all remaining hours.
    pub fn is_unbounded(&self) -> bool {
        self.hours_in_tier.is_none()
    }
}

/// Flat per-category rates for one employee.
///
/// Used by the per-employee earnings path. An absent row for a worker
/// means every category rate is zero, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRate {
    /// The worker the rates belong to.
    pub user_id: String,
    /// The company the rates were agreed with.
    pub company_id: String,
    /// Rate for weekday hours, in minor units per hour.
    pub weekday_rate: i64,
    /// Rate for weekday hours at or after the weeknight threshold.
    pub weeknight_rate: i64,
    /// Rate for Saturday hours.
    pub saturday_rate: i64,
    /// Rate for Sunday hours.
    pub sunday_rate: i64,
    /// Rate for public-holiday hours.
    pub public_holiday_rate: i64,
    /// ISO currency code the rates are denominated in.
    pub currency: String,
}

impl EmployeeRate {
    /// Returns the flat rate for the given day category.
    pub fn rate_for(&self, category: DayCategory) -> i64 {
        match category {
            DayCategory::Weekday => self.weekday_rate,
            DayCategory::Weeknight => self.weeknight_rate,
            DayCategory::Saturday => self.saturday_rate,
            DayCategory::Sunday => self.sunday_rate,
            DayCategory::PublicHoliday => self.public_holiday_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_tier(valid_from: Option<&str>, valid_to: Option<&str>) -> RateTier {
        RateTier {
            company_id: "acme".to_string(),
            shift_type: "standard".to_string(),
            day_type: DayCategory::Weekday,
            tier_order: 1,
            hours_in_tier: Some(Decimal::new(80, 1)),
            rate_per_hour: 2500,
            valid_from: valid_from.map(make_date),
            valid_to: valid_to.map(make_date),
        }
    }

    fn make_employee_rate() -> EmployeeRate {
        EmployeeRate {
            user_id: "user_001".to_string(),
            company_id: "acme".to_string(),
            weekday_rate: 2000,
            weeknight_rate: 2400,
            saturday_rate: 2800,
            sunday_rate: 3200,
            public_holiday_rate: 4000,
            currency: "AUD".to_string(),
        }
    }

    #[test]
    fn test_open_window_applies_on_any_date() {
        let tier = make_tier(None, None);
        assert!(tier.applies_on(make_date("1999-01-01")));
        assert!(tier.applies_on(make_date("2099-12-31")));
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let tier = make_tier(Some("2025-01-01"), Some("2025-12-31"));
        assert!(tier.applies_on(make_date("2025-01-01")));
        assert!(tier.applies_on(make_date("2025-12-31")));
        assert!(tier.applies_on(make_date("2025-06-15")));
        assert!(!tier.applies_on(make_date("2024-12-31")));
        assert!(!tier.applies_on(make_date("2026-01-01")));
    }

    #[test]
    fn test_half_open_windows() {
        let from_only = make_tier(Some("2025-01-01"), None);
        assert!(from_only.applies_on(make_date("2030-01-01")));
        assert!(!from_only.applies_on(make_date("2024-06-01")));

        let to_only = make_tier(None, Some("2025-12-31"));
        assert!(to_only.applies_on(make_date("2020-01-01")));
        assert!(!to_only.applies_on(make_date("2026-06-01")));
    }

    #[test]
    fn test_unbounded_tier_detection() {
        let mut tier = make_tier(None, None);
        assert!(!tier.is_unbounded());
        tier.hours_in_tier = None;
        assert!(tier.is_unbounded());
    }

    #[test]
    fn test_employee_rate_category_lookup() {
        let rate = make_employee_rate();
        assert_eq!(rate.rate_for(DayCategory::Weekday), 2000);
        assert_eq!(rate.rate_for(DayCategory::Weeknight), 2400);
        assert_eq!(rate.rate_for(DayCategory::Saturday), 2800);
        assert_eq!(rate.rate_for(DayCategory::Sunday), 3200);
        assert_eq!(rate.rate_for(DayCategory::PublicHoliday), 4000);
    }

    #[test]
    fn test_tier_deserializes_without_window_fields() {
        let json = r#"{
            "company_id": "acme",
            "shift_type": "standard",
            "day_type": "weekday",
            "tier_order": 1,
            "hours_in_tier": null,
            "rate_per_hour": 2500
        }"#;

        let tier: RateTier = serde_json::from_str(json).unwrap();
        assert!(tier.is_unbounded());
        assert!(tier.applies_on(make_date("2025-10-06")));
    }
}
