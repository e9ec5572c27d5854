//! Billing result models.
//!
//! This module contains the computed line items and per-shift results
//! produced by the billing calculator. All monetary values are integer
//! minor currency units (e.g. cents); presentation code owns formatting.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{DayCategory, Shift};

/// Computes the minor-unit subtotal for a block of hours at a rate.
///
/// Rounds half away from zero at minor-unit granularity, the rounding
/// convention used for every monetary amount the engine produces.
///
/// # Examples
///
/// ```
/// use billing_engine::models::subtotal_minor_units;
/// use rust_decimal::Decimal;
///
/// // 8 hours at 2500 minor units/hour
/// assert_eq!(subtotal_minor_units(Decimal::new(80, 1), 2500), 20000);
///
/// // 7.5 hours at 2525 minor units/hour rounds 18937.5 up
/// assert_eq!(subtotal_minor_units(Decimal::new(75, 1), 2525), 18938);
/// ```
pub fn subtotal_minor_units(hours: Decimal, rate_per_hour: i64) -> i64 {
    let amount = (hours * Decimal::from(rate_per_hour))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    amount.to_i64().expect("rounded subtotal fits in i64")
}

/// A single billed line item: some hours of one category at one rate.
///
/// Every allocation carries its category explicitly from the point it is
/// produced; downstream aggregation never re-derives the category from
/// the rate. `tier` is the originating tier's order for tiered billing
/// and `None` for flat-rate and fallback lines.
///
/// # Example
///
/// ```
/// use billing_engine::models::{DayCategory, RatedAllocation};
/// use rust_decimal::Decimal;
///
/// let line = RatedAllocation::new(DayCategory::Weekday, Some(1), Decimal::new(80, 1), 2500);
/// assert_eq!(line.subtotal, 20000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedAllocation {
    /// The day category the hours are billed under.
    pub category: DayCategory,
    /// Order of the rate tier the hours were consumed from, if any.
    pub tier: Option<u32>,
    /// The number of hours billed on this line.
    pub hours: Decimal,
    /// The rate applied, in minor units per hour.
    pub rate: i64,
    /// The line amount in minor units: `round(hours * rate)`.
    pub subtotal: i64,
}

impl RatedAllocation {
    /// Creates an allocation, deriving the subtotal from hours and rate.
    pub fn new(category: DayCategory, tier: Option<u32>, hours: Decimal, rate: i64) -> Self {
        Self {
            category,
            tier,
            hours,
            rate,
            subtotal: subtotal_minor_units(hours, rate),
        }
    }
}

/// The complete billing result for a single shift.
///
/// `day_type` is the calendar classification of the shift's date; the
/// allocations carry the billed categories, which differ from `day_type`
/// when weekday evening hours were split off as weeknight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBilling {
    /// The shift this billing belongs to.
    pub shift_id: String,
    /// The rostered date of the shift.
    pub date: NaiveDate,
    /// The calendar classification of the shift's date.
    pub day_type: DayCategory,
    /// The shift type the rates were resolved for.
    pub shift_type: String,
    /// Total billed hours: the sum of the allocation hours.
    pub total_hours: Decimal,
    /// Total amount in minor units: the sum of the allocation subtotals.
    pub total_amount: i64,
    /// The individual billed line items.
    pub billing: Vec<RatedAllocation>,
}

impl ShiftBilling {
    /// Assembles a shift's billing result, deriving the totals from the
    /// allocations.
    pub fn new(shift: &Shift, day_type: DayCategory, billing: Vec<RatedAllocation>) -> Self {
        let total_hours = billing.iter().map(|line| line.hours).sum();
        let total_amount = billing.iter().map(|line| line.subtotal).sum();
        Self {
            shift_id: shift.id.clone(),
            date: shift.date,
            day_type,
            shift_type: shift.shift_type.clone(),
            total_hours,
            total_amount,
            billing,
        }
    }
}

/// Accumulated hours and amount for one day category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Accumulated billed hours.
    pub hours: Decimal,
    /// Accumulated amount in minor units.
    pub amount: i64,
}

impl CategoryTotals {
    /// Folds one allocation into the running totals.
    pub fn accumulate(&mut self, line: &RatedAllocation) {
        self.hours += line.hours;
        self.amount += line.subtotal;
    }
}
