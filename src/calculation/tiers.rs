//! Tiered billing calculation.
//!
//! This module consumes a shift's hours against an ordered list of rate
//! tiers, producing one billed line item per tier touched. When no tiers
//! are configured for a combination, all hours are billed at a single
//! flat fallback rate instead.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{DayCategory, RateTier, RatedAllocation};

/// The flat rate applied when no rate tiers are configured, in minor
/// currency units per hour.
pub const DEFAULT_FALLBACK_RATE: i64 = 2500;

/// Bills hours against ordered rate tiers, one allocation per tier used.
///
/// Tiers are consumed in the order given, which the store supplies
/// ascending by `tier_order`. Each bounded tier absorbs up to its
/// `hours_in_tier`; an unbounded tier absorbs everything remaining and
/// ends consumption. With no tiers at all, the whole block of hours is
/// billed as a single line at `fallback_rate`.
///
/// When bounded tiers run out before the hours do, the remainder goes
/// unbilled; authoring such a group is a configuration problem, flagged
/// here with a warning rather than patched.
///
/// # Arguments
///
/// * `category` - The day category stamped on every produced allocation
/// * `total_hours` - The hours to bill
/// * `tiers` - Applicable tiers, ascending by `tier_order`
/// * `fallback_rate` - Minor-unit rate used when `tiers` is empty
///
/// # Returns
///
/// The billed allocations, in consumption order.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::bill_hours;
/// use billing_engine::models::{DayCategory, RateTier};
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     RateTier {
///         company_id: "acme".to_string(),
///         shift_type: "standard".to_string(),
///         day_type: DayCategory::Weekday,
///         tier_order: 1,
///         hours_in_tier: Some(Decimal::new(40, 1)), // 4 hours
///         rate_per_hour: 2500,
///         valid_from: None,
///         valid_to: None,
///     },
///     RateTier {
///         company_id: "acme".to_string(),
///         shift_type: "standard".to_string(),
///         day_type: DayCategory::Weekday,
///         tier_order: 2,
///         hours_in_tier: None,
///         rate_per_hour: 3000,
///         valid_from: None,
///         valid_to: None,
///     },
/// ];
///
/// let billing = bill_hours(DayCategory::Weekday, Decimal::new(100, 1), &tiers, 2500);
/// assert_eq!(billing.len(), 2);
/// assert_eq!(billing[0].subtotal, 10000); // 4h at 2500
/// assert_eq!(billing[1].subtotal, 18000); // remaining 6h at 3000
/// ```
pub fn bill_hours(
    category: DayCategory,
    total_hours: Decimal,
    tiers: &[RateTier],
    fallback_rate: i64,
) -> Vec<RatedAllocation> {
    if tiers.is_empty() {
        warn!(
            category = %category,
            rate = fallback_rate,
            "No rate tiers configured, billing at fallback rate"
        );
        return vec![RatedAllocation::new(category, None, total_hours, fallback_rate)];
    }

    let mut billing = Vec::new();
    let mut remaining = total_hours;

    for tier in tiers {
        if remaining <= Decimal::ZERO {
            break;
        }

        let tier_hours = match tier.hours_in_tier {
            Some(capacity) => remaining.min(capacity),
            None => remaining,
        };

        billing.push(RatedAllocation::new(
            category,
            Some(tier.tier_order),
            tier_hours,
            tier.rate_per_hour,
        ));
        remaining -= tier_hours;

        // An unbounded tier is terminal by construction.
        if tier.is_unbounded() {
            break;
        }
    }

    if remaining > Decimal::ZERO {
        warn!(
            category = %category,
            unbilled_hours = %remaining,
            "Tier capacity exhausted, remaining hours unbilled"
        );
    }

    billing
}
