//! Single-shift billing orchestration.
//!
//! This module wires the calculation stages together: it validates the
//! shift, measures its duration, classifies its date, optionally splits
//! weekday evening hours, and prices each portion through the configured
//! [`RateProvider`].

use chrono::NaiveTime;
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::day_type::classify_date;
use crate::calculation::duration::shift_hours;
use crate::calculation::provider::RateProvider;
use crate::calculation::weeknight::split_weeknight;
use crate::error::EngineResult;
use crate::models::{DayCategory, HolidayCalendar, RatedAllocation, Shift, ShiftBilling};

/// Bills a single shift.
///
/// The shift's date is classified against the holiday calendar, its
/// duration is measured with the midnight-crossing rule, and the hours
/// are priced through the provider. For weekday shifts under a provider
/// that splits weeknight hours, the portion at or after
/// `weeknight_threshold` is billed as `weeknight` and the rest as
/// `weekday`, as separate line items on the same result.
///
/// # Arguments
///
/// * `shift` - The shift to bill
/// * `provider` - The rate source pricing the hours
/// * `holidays` - The public-holiday calendar for date classification
/// * `weeknight_threshold` - Clock time after which weekday hours count
///   as weeknight
///
/// # Returns
///
/// Returns the shift's billing result, or an error if the shift fails
/// validation or the provider cannot supply rates.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::{TieredRates, bill_shift};
/// use billing_engine::models::{HolidayCalendar, Shift, parse_clock_time};
/// use billing_engine::store::InMemoryStore;
/// use chrono::NaiveDate;
/// use std::sync::Arc;
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
///     start_time: parse_clock_time("09:00").unwrap(),
///     end_time: parse_clock_time("17:00").unwrap(),
///     shift_type: "standard".to_string(),
///     company_id: "acme".to_string(),
///     user_id: "user_001".to_string(),
/// };
///
/// let provider = TieredRates::new(Arc::new(InMemoryStore::new()));
/// let holidays = HolidayCalendar::default();
/// let threshold = parse_clock_time("19:00").unwrap();
///
/// let result = bill_shift(&shift, &provider, &holidays, threshold).unwrap();
/// assert_eq!(result.total_amount, 20000);
/// ```
pub fn bill_shift(
    shift: &Shift,
    provider: &dyn RateProvider,
    holidays: &HolidayCalendar,
    weeknight_threshold: NaiveTime,
) -> EngineResult<ShiftBilling> {
    shift.validate()?;

    let total_hours = shift_hours(shift);
    let day_type = classify_date(shift.date, holidays);

    let billing = if day_type == DayCategory::Weekday && provider.splits_weeknight() {
        let split = split_weeknight(shift, weeknight_threshold);
        let mut billing: Vec<RatedAllocation> = Vec::new();
        if split.weekday_hours > Decimal::ZERO {
            billing.extend(provider.rate(shift, DayCategory::Weekday, split.weekday_hours)?);
        }
        if split.weeknight_hours > Decimal::ZERO {
            billing.extend(provider.rate(shift, DayCategory::Weeknight, split.weeknight_hours)?);
        }
        billing
    } else {
        provider.rate(shift, day_type, total_hours)?
    };

    let result = ShiftBilling::new(shift, day_type, billing);
    info!(
        shift_id = %result.shift_id,
        day_type = %result.day_type,
        total_hours = %result.total_hours,
        total_amount = result.total_amount,
        "Shift billed"
    );
    Ok(result)
}
