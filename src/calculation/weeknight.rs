//! Weeknight split detection.
//!
//! This module determines how much of a weekday shift falls at or after
//! the configurable weeknight threshold. The split only applies to
//! flat-rate billing of weekday shifts; tiered billing treats weeknight
//! as a separately configured day category and never splits.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::duration::{minutes_since_midnight, shift_minutes};
use crate::models::Shift;

/// The division of a weekday shift's hours at the weeknight threshold.
///
/// Both portions can be zero-sided: a shift ending at or before the
/// threshold is all weekday, and a shift starting at or after it is all
/// weeknight.
///
/// # Example
///
/// ```
/// use billing_engine::calculation::WeeknightSplit;
/// use rust_decimal::Decimal;
///
/// let split = WeeknightSplit {
///     weekday_hours: Decimal::new(20, 1),
///     weeknight_hours: Decimal::new(20, 1),
/// };
/// assert_eq!(split.total_hours(), Decimal::new(40, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeknightSplit {
    /// Hours before the weeknight threshold.
    pub weekday_hours: Decimal,
    /// Hours at or after the weeknight threshold.
    pub weeknight_hours: Decimal,
}

impl WeeknightSplit {
    /// Returns the combined hours of both portions.
    pub fn total_hours(&self) -> Decimal {
        self.weekday_hours + self.weeknight_hours
    }
}

/// Computes the hours of a shift that fall at or after the threshold.
///
/// The shift is laid out on a minute line starting at `start`; an end at
/// or before the start crosses midnight, and the hours past midnight
/// count as after the threshold. The result is clamped to
/// `[0, total hours]`.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::weeknight_hours_after;
/// use billing_engine::models::parse_clock_time;
/// use rust_decimal::Decimal;
///
/// let threshold = parse_clock_time("19:00").unwrap();
///
/// // 17:00-21:00 has two hours past the threshold
/// let hours = weeknight_hours_after(
///     parse_clock_time("17:00").unwrap(),
///     parse_clock_time("21:00").unwrap(),
///     threshold,
/// );
/// assert_eq!(hours, Decimal::new(20, 1)); // 2.0
/// ```
pub fn weeknight_hours_after(start: NaiveTime, end: NaiveTime, threshold: NaiveTime) -> Decimal {
    let total_minutes = shift_minutes(start, end);

    let start_minutes = minutes_since_midnight(start);
    let end_minutes = start_minutes + total_minutes;
    let threshold_minutes = minutes_since_midnight(threshold);

    // Hours from the later of (shift start, threshold) to the shift end,
    // in extended minutes so the post-midnight tail counts as evening.
    let after_threshold =
        (end_minutes - start_minutes.max(threshold_minutes)).clamp(0, total_minutes);

    Decimal::new(after_threshold, 0) / Decimal::new(60, 0)
}

/// Splits a weekday shift's hours at the weeknight threshold.
///
/// Three outcomes drive downstream billing: all hours before the
/// threshold (whole shift billed as weekday), all hours at or after it
/// (whole shift billed as weeknight), or a genuine split producing two
/// line items that share the shift identity.
///
/// # Arguments
///
/// * `shift` - The shift to split; the caller has already classified its
///   date as a weekday
/// * `threshold` - The weeknight threshold time, e.g. 19:00
///
/// # Returns
///
/// The [`WeeknightSplit`] whose portions sum to the shift's total hours.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::split_weeknight;
/// use billing_engine::models::{Shift, parse_clock_time};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
///     start_time: parse_clock_time("17:00").unwrap(),
///     end_time: parse_clock_time("21:00").unwrap(),
///     shift_type: "standard".to_string(),
///     company_id: "acme".to_string(),
///     user_id: "user_001".to_string(),
/// };
///
/// let split = split_weeknight(&shift, parse_clock_time("19:00").unwrap());
/// assert_eq!(split.weekday_hours, Decimal::new(20, 1));
/// assert_eq!(split.weeknight_hours, Decimal::new(20, 1));
/// ```
pub fn split_weeknight(shift: &Shift, threshold: NaiveTime) -> WeeknightSplit {
    let total_minutes = shift_minutes(shift.start_time, shift.end_time);
    let total_hours = Decimal::new(total_minutes, 0) / Decimal::new(60, 0);

    let weeknight_hours = weeknight_hours_after(shift.start_time, shift.end_time, threshold);

    WeeknightSplit {
        weekday_hours: total_hours - weeknight_hours,
        weeknight_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_clock_time;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        parse_clock_time(s).unwrap()
    }

    fn threshold() -> NaiveTime {
        time("19:00")
    }

    fn make_shift(start: &str, end: &str) -> Shift {
        Shift {
            id: "shift_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
            start_time: time(start),
            end_time: time(end),
            shift_type: "standard".to_string(),
            company_id: "acme".to_string(),
            user_id: "user_001".to_string(),
        }
    }

    /// WN-001: shift straddling the threshold splits in two
    #[test]
    fn test_straddling_shift_splits() {
        let split = split_weeknight(&make_shift("17:00", "21:00"), threshold());
        assert_eq!(split.weekday_hours, dec("2.0"));
        assert_eq!(split.weeknight_hours, dec("2.0"));
    }

    /// WN-002: shift entirely before the threshold has no weeknight hours
    #[test]
    fn test_day_shift_has_no_weeknight_hours() {
        let split = split_weeknight(&make_shift("09:00", "17:00"), threshold());
        assert_eq!(split.weekday_hours, dec("8.0"));
        assert_eq!(split.weeknight_hours, Decimal::ZERO);
    }

    /// WN-003: shift starting after the threshold is all weeknight
    #[test]
    fn test_evening_shift_is_all_weeknight() {
        let split = split_weeknight(&make_shift("20:00", "23:00"), threshold());
        assert_eq!(split.weekday_hours, Decimal::ZERO);
        assert_eq!(split.weeknight_hours, dec("3.0"));
    }

    /// WN-004: overnight shift starting after the threshold
    #[test]
    fn test_overnight_shift_is_all_weeknight() {
        let split = split_weeknight(&make_shift("22:00", "06:00"), threshold());
        assert_eq!(split.weekday_hours, Decimal::ZERO);
        assert_eq!(split.weeknight_hours, dec("8.0"));
    }

    /// WN-005: overnight shift starting before the threshold splits,
    /// with the post-midnight tail counting as weeknight
    #[test]
    fn test_overnight_shift_starting_before_threshold() {
        let split = split_weeknight(&make_shift("18:00", "02:00"), threshold());
        assert_eq!(split.weekday_hours, dec("1.0"));
        assert_eq!(split.weeknight_hours, dec("7.0"));
    }

    /// WN-006: ending exactly at the threshold leaves no weeknight hours
    #[test]
    fn test_shift_ending_at_threshold() {
        let split = split_weeknight(&make_shift("15:00", "19:00"), threshold());
        assert_eq!(split.weekday_hours, dec("4.0"));
        assert_eq!(split.weeknight_hours, Decimal::ZERO);
    }

    /// WN-007: starting exactly at the threshold is all weeknight
    #[test]
    fn test_shift_starting_at_threshold() {
        let split = split_weeknight(&make_shift("19:00", "23:00"), threshold());
        assert_eq!(split.weekday_hours, Decimal::ZERO);
        assert_eq!(split.weeknight_hours, dec("4.0"));
    }

    #[test]
    fn test_fractional_split() {
        let split = split_weeknight(&make_shift("18:30", "20:15"), threshold());
        assert_eq!(split.weekday_hours, dec("0.5"));
        assert_eq!(split.weeknight_hours, dec("1.25"));
    }

    #[test]
    fn test_split_preserves_total() {
        for (start, end) in [
            ("09:00", "17:00"),
            ("17:00", "21:00"),
            ("22:00", "06:00"),
            ("18:00", "02:00"),
            ("12:15", "19:45"),
        ] {
            let shift = make_shift(start, end);
            let split = split_weeknight(&shift, threshold());
            assert_eq!(
                split.total_hours(),
                crate::calculation::shift_hours(&shift),
                "split for {start}-{end} must preserve the total"
            );
        }
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_weeknight(&make_shift("17:00", "21:00"), time("18:00"));
        assert_eq!(split.weekday_hours, dec("1.0"));
        assert_eq!(split.weeknight_hours, dec("3.0"));
    }
}
