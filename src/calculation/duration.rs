//! Shift duration calculation.
//!
//! This module converts wall-clock start/end time pairs into elapsed
//! hours. A shift whose end time is at or before its start time is
//! treated as crossing midnight into the following day.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::models::Shift;

/// The number of minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Converts a wall-clock time to minutes since midnight.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Computes the elapsed minutes between two wall-clock times.
///
/// When `end` is at or before `start`, the shift crosses midnight: a full
/// day is added to the end before subtracting. Equal times therefore
/// compute as a full 24-hour day under this rule; [`Shift::validate`]
/// rejects such shifts before billing ever reaches this computation.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::shift_minutes;
/// use billing_engine::models::parse_clock_time;
///
/// let start = parse_clock_time("22:00").unwrap();
/// let end = parse_clock_time("06:00").unwrap();
/// assert_eq!(shift_minutes(start, end), 480);
/// ```
pub fn shift_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_minutes = minutes_since_midnight(start);
    let mut end_minutes = minutes_since_midnight(end);

    if end_minutes <= start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    end_minutes - start_minutes
}

/// Computes the elapsed hours between two wall-clock times.
///
/// Fractional hours are preserved, e.g. a 7 hour 30 minute shift yields
/// 7.5.
///
/// # Arguments
///
/// * `start` - The wall-clock start time
/// * `end` - The wall-clock end time; at or before `start` means the
///   shift crosses midnight
///
/// # Returns
///
/// The elapsed time in hours as a Decimal.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::elapsed_hours;
/// use billing_engine::models::parse_clock_time;
/// use rust_decimal::Decimal;
///
/// let start = parse_clock_time("09:00").unwrap();
/// let end = parse_clock_time("17:00").unwrap();
/// assert_eq!(elapsed_hours(start, end), Decimal::new(80, 1)); // 8.0
/// ```
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    Decimal::new(shift_minutes(start, end), 0) / Decimal::new(60, 0)
}

/// Computes the total hours of a shift from its start and end times.
pub fn shift_hours(shift: &Shift) -> Decimal {
    elapsed_hours(shift.start_time, shift.end_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_clock_time;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        parse_clock_time(s).unwrap()
    }

    /// DUR-001: standard day shift
    #[test]
    fn test_standard_day_shift() {
        assert_eq!(elapsed_hours(time("09:00"), time("17:00")), dec("8.0"));
    }

    /// DUR-002: midnight-crossing shift
    #[test]
    fn test_midnight_crossing_shift() {
        assert_eq!(elapsed_hours(time("22:00"), time("06:00")), dec("8.0"));
    }

    /// DUR-003: short shift across midnight
    #[test]
    fn test_short_shift_across_midnight() {
        assert_eq!(elapsed_hours(time("23:30"), time("00:30")), dec("1.0"));
    }

    #[test]
    fn test_fractional_hours() {
        assert_eq!(elapsed_hours(time("09:00"), time("16:30")), dec("7.5"));
        assert_eq!(elapsed_hours(time("09:15"), time("09:30")), dec("0.25"));
    }

    #[test]
    fn test_end_exactly_at_midnight() {
        // 00:00 end reads as the next midnight
        assert_eq!(elapsed_hours(time("16:00"), time("00:00")), dec("8.0"));
    }

    #[test]
    fn test_equal_times_wrap_a_full_day() {
        // The midnight rule turns equal times into 24 hours; shift
        // validation rejects this input before billing.
        assert_eq!(elapsed_hours(time("09:00"), time("09:00")), dec("24.0"));
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight(time("00:00")), 0);
        assert_eq!(minutes_since_midnight(time("09:30")), 570);
        assert_eq!(minutes_since_midnight(time("23:59")), 1439);
    }

    #[test]
    fn test_shift_minutes_end_before_start() {
        assert_eq!(shift_minutes(time("23:00"), time("01:00")), 120);
    }
}
