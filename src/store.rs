//! Reference-data store boundary.
//!
//! The engine consumes rate tiers, public holidays, employee rates, and
//! rostered shifts from an external store; this module defines that
//! boundary as the [`BillingStore`] trait. The engine performs no I/O of
//! its own, so implementations wrap whatever persistence the embedding
//! application uses. An [`InMemoryStore`] ships with the crate for tests
//! and for embedding without a database.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{BillingPeriod, DayCategory, EmployeeRate, HolidayCalendar, RateTier, Shift};

/// Read access to the reference data billing depends on.
///
/// All queries are snapshots: the engine fetches what it needs at the
/// start of a calculation and never writes back. Implementations must be
/// shareable across the batch fan-out, hence `Send + Sync`.
pub trait BillingStore: Send + Sync {
    /// Returns the rate tiers applicable to the given combination,
    /// ascending by `tier_order`. Only tiers whose validity window
    /// contains `date` are returned. An empty result is not an error;
    /// billing falls back to a flat rate.
    fn rate_tiers(
        &self,
        company_id: &str,
        shift_type: &str,
        day_type: DayCategory,
        date: NaiveDate,
    ) -> EngineResult<Vec<RateTier>>;

    /// Returns the global public-holiday calendar.
    fn public_holidays(&self) -> EngineResult<HolidayCalendar>;

    /// Returns the flat category rates for a worker, or `None` when no
    /// row exists; an absent row means every category rate is zero.
    fn employee_rate(&self, user_id: &str) -> EngineResult<Option<EmployeeRate>>;

    /// Returns the worker's rostered shifts dated within the period.
    fn shifts(&self, user_id: &str, period: &BillingPeriod) -> EngineResult<Vec<Shift>>;
}

/// A [`BillingStore`] backed by plain vectors.
///
/// # Example
///
/// ```
/// use billing_engine::store::{BillingStore, InMemoryStore};
/// use billing_engine::models::{DayCategory, RateTier};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore {
///     tiers: vec![RateTier {
///         company_id: "acme".to_string(),
///         shift_type: "standard".to_string(),
///         day_type: DayCategory::Weekday,
///         tier_order: 1,
///         hours_in_tier: None,
///         rate_per_hour: 2500,
///         valid_from: None,
///         valid_to: None,
///     }],
///     ..InMemoryStore::new()
/// };
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
/// let tiers = store.rate_tiers("acme", "standard", DayCategory::Weekday, date).unwrap();
/// assert_eq!(tiers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// All configured rate tiers, in any order.
    pub tiers: Vec<RateTier>,
    /// The public-holiday calendar.
    pub holidays: HolidayCalendar,
    /// Flat per-employee rate rows.
    pub employee_rates: Vec<EmployeeRate>,
    /// Rostered shifts for all workers.
    pub shifts: Vec<Shift>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BillingStore for InMemoryStore {
    fn rate_tiers(
        &self,
        company_id: &str,
        shift_type: &str,
        day_type: DayCategory,
        date: NaiveDate,
    ) -> EngineResult<Vec<RateTier>> {
        let mut tiers: Vec<RateTier> = self
            .tiers
            .iter()
            .filter(|tier| {
                tier.company_id == company_id
                    && tier.shift_type == shift_type
                    && tier.day_type == day_type
                    && tier.applies_on(date)
            })
            .cloned()
            .collect();
        tiers.sort_by_key(|tier| tier.tier_order);
        Ok(tiers)
    }

    fn public_holidays(&self) -> EngineResult<HolidayCalendar> {
        Ok(self.holidays.clone())
    }

    fn employee_rate(&self, user_id: &str) -> EngineResult<Option<EmployeeRate>> {
        Ok(self
            .employee_rates
            .iter()
            .find(|rate| rate.user_id == user_id)
            .cloned())
    }

    fn shifts(&self, user_id: &str, period: &BillingPeriod) -> EngineResult<Vec<Shift>> {
        Ok(self
            .shifts
            .iter()
            .filter(|shift| shift.user_id == user_id && period.contains_date(shift.date))
            .cloned()
            .collect())
    }
}
