//! Core data models for the Shift Billing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod billing;
mod day;
mod period;
mod rates;
mod shift;
mod summary;

pub use billing::{CategoryTotals, RatedAllocation, ShiftBilling, subtotal_minor_units};
pub use day::{DayCategory, HolidayCalendar};
pub use period::BillingPeriod;
pub use rates::{EmployeeRate, RateTier};
pub use shift::{Shift, clock_time, parse_clock_time};
pub use summary::{PeriodSummary, ShiftFailure};
