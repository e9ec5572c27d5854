//! Calculation logic for the Shift Billing Engine.
//!
//! This module contains all the calculation stages for billing shifts,
//! including duration measurement with the midnight-crossing rule, day
//! classification against the public-holiday calendar, weeknight hour
//! splitting for flat-rate billing, ordered tier consumption with flat
//! fallback, the rate provider abstraction over the tiered and flat-rate
//! paths, single-shift orchestration, and batch billing over a
//! reporting period.

mod batch;
mod day_type;
mod duration;
mod engine;
mod provider;
mod tiers;
mod weeknight;

pub use batch::bill_period;
pub use day_type::classify_date;
pub use duration::{
    MINUTES_PER_DAY, elapsed_hours, minutes_since_midnight, shift_hours, shift_minutes,
};
pub use engine::bill_shift;
pub use provider::{FlatRates, RateProvider, TieredRates};
pub use tiers::{DEFAULT_FALLBACK_RATE, bill_hours};
pub use weeknight::{WeeknightSplit, split_weeknight, weeknight_hours_after};
