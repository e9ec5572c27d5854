//! Shift model and wall-clock time handling.
//!
//! This module defines the Shift struct for representing rostered work
//! shifts, along with parsing and serialization of the "HH:MM" wall-clock
//! time strings used throughout the billing system. Shift times carry no
//! timezone; they are local wall-clock agreements between the company and
//! the worker.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parses a strict 24-hour "HH:MM" wall-clock time string.
///
/// Both fields must be exactly two digits. Out-of-range hours or minutes
/// are rejected rather than wrapped.
///
/// # Arguments
///
/// * `value` - The time string to parse, e.g. `"09:00"` or `"23:30"`
///
/// # Returns
///
/// The parsed [`NaiveTime`], or [`EngineError::InvalidTime`] when the
/// string is not a valid "HH:MM" value.
///
/// # Examples
///
/// ```
/// use billing_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// let time = parse_clock_time("19:00").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
///
/// assert!(parse_clock_time("25:00").is_err());
/// assert!(parse_clock_time("9am").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    let invalid = |message: &str| EngineError::InvalidTime {
        value: value.to_string(),
        message: message.to_string(),
    };

    let (hours, minutes) = value
        .split_once(':')
        .ok_or_else(|| invalid("expected HH:MM"))?;

    if hours.len() != 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("expected HH:MM"));
    }

    let hour: u32 = hours.parse().map_err(|_| invalid("expected HH:MM"))?;
    let minute: u32 = minutes.parse().map_err(|_| invalid("expected HH:MM"))?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid("hour or minute out of range"))
}

/// Serde adapter for wall-clock times in "HH:MM" format.
///
/// Used with `#[serde(with = "clock_time")]` on [`NaiveTime`] fields so
/// shifts and configuration round-trip the same strings the scheduling
/// subsystem stores.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serializes a time as an "HH:MM" string.
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    /// Deserializes an "HH:MM" string into a time.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_clock_time(&value).map_err(de::Error::custom)
    }
}

/// Represents a rostered work shift as supplied by the scheduling subsystem.
///
/// Times are wall-clock values; a shift whose end time is at or before its
/// start time crosses midnight into the following day. The `date` field is
/// the calendar date the shift is rostered on and is the sole input to day
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The rostered date of the shift (used for determining day category).
    pub date: NaiveDate,
    /// The wall-clock start time of the shift.
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    /// The wall-clock end time of the shift.
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    /// The type of work performed, matched against rate tier configuration.
    pub shift_type: String,
    /// The company the shift was worked for.
    pub company_id: String,
    /// The worker the shift belongs to.
    pub user_id: String,
}

impl Shift {
    /// Checks the shift for data that cannot be billed.
    ///
    /// A shift whose start and end times are equal is rejected: under the
    /// midnight-crossing rule it would otherwise compute as a 24-hour
    /// shift, which no caller intends for a zero-length roster entry.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a billable shift, or [`EngineError::InvalidShift`]
    /// naming the offending shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use billing_engine::models::{Shift, parse_clock_time};
    /// use chrono::NaiveDate;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
    ///     start_time: parse_clock_time("09:00").unwrap(),
    ///     end_time: parse_clock_time("09:00").unwrap(),
    ///     shift_type: "standard".to_string(),
    ///     company_id: "acme".to_string(),
    ///     user_id: "user_001".to_string(),
    /// };
    /// assert!(shift.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_time == self.end_time {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: "start and end times are equal".to_string(),
            });
        }
        Ok(())
    }

    /// Returns true when the shift runs past midnight into the next day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}
