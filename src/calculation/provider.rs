//! Rate provider abstraction.
//!
//! The engine prices a shift through a [`RateProvider`]. Two sources
//! exist: [`TieredRates`] consumes the company's ordered rate tiers from
//! the store, and [`FlatRates`] bills every hour at a worker's flat
//! category rate. The provider also decides whether weekday evening
//! hours are split into a separate weeknight portion, since only flat
//! category rates carry a distinct weeknight price.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::tiers::{DEFAULT_FALLBACK_RATE, bill_hours};
use crate::error::EngineResult;
use crate::models::{DayCategory, EmployeeRate, RatedAllocation, Shift};
use crate::store::BillingStore;

/// A source of hourly prices for shift hours.
pub trait RateProvider: Send + Sync {
    /// Whether weekday shifts should have their evening hours billed as
    /// a separate weeknight portion.
    fn splits_weeknight(&self) -> bool;

    /// Prices `hours` of the given shift under `category`, returning one
    /// allocation per rate applied.
    fn rate(
        &self,
        shift: &Shift,
        category: DayCategory,
        hours: Decimal,
    ) -> EngineResult<Vec<RatedAllocation>>;
}

/// Prices hours against the company's validity-windowed rate tiers.
///
/// Tiers are fetched per shift for the shift's company, type, day
/// category, and date, then consumed in `tier_order`. When no tier
/// matches, the whole shift is billed at the fallback rate.
#[derive(Clone)]
pub struct TieredRates {
    store: Arc<dyn BillingStore>,
    fallback_rate: i64,
}

impl TieredRates {
    /// Creates a tiered provider with the default fallback rate.
    pub fn new(store: Arc<dyn BillingStore>) -> Self {
        Self {
            store,
            fallback_rate: DEFAULT_FALLBACK_RATE,
        }
    }

    /// Creates a tiered provider with a custom fallback rate in minor
    /// units per hour.
    pub fn with_fallback_rate(store: Arc<dyn BillingStore>, fallback_rate: i64) -> Self {
        Self {
            store,
            fallback_rate,
        }
    }
}

impl RateProvider for TieredRates {
    fn splits_weeknight(&self) -> bool {
        false
    }

    fn rate(
        &self,
        shift: &Shift,
        category: DayCategory,
        hours: Decimal,
    ) -> EngineResult<Vec<RatedAllocation>> {
        let tiers = self.store.rate_tiers(
            &shift.company_id,
            &shift.shift_type,
            category,
            shift.date,
        )?;
        Ok(bill_hours(category, hours, &tiers, self.fallback_rate))
    }
}

/// Prices every hour at the worker's flat rate for the day category.
///
/// A worker without a rate row is billed at zero for every category;
/// the shift still produces a result rather than an error.
#[derive(Debug, Clone)]
pub struct FlatRates {
    rate: Option<EmployeeRate>,
}

impl FlatRates {
    /// Creates a flat provider from an optional rate row.
    pub fn new(rate: Option<EmployeeRate>) -> Self {
        Self { rate }
    }

    /// Looks up the worker's rate row in the store.
    ///
    /// # Arguments
    ///
    /// * `store` - The store to query
    /// * `user_id` - The worker whose rates to fetch
    ///
    /// # Returns
    ///
    /// Returns a provider billing at the worker's rates, or at zero when
    /// no row exists for them.
    pub fn from_store(store: &dyn BillingStore, user_id: &str) -> EngineResult<Self> {
        let rate = store.employee_rate(user_id)?;
        if rate.is_none() {
            warn!(user_id = %user_id, "No employee rate row found, billing at zero rates");
        }
        Ok(Self { rate })
    }
}

impl RateProvider for FlatRates {
    fn splits_weeknight(&self) -> bool {
        true
    }

    fn rate(
        &self,
        _shift: &Shift,
        category: DayCategory,
        hours: Decimal,
    ) -> EngineResult<Vec<RatedAllocation>> {
        let rate_per_hour = self.rate.as_ref().map_or(0, |rate| rate.rate_for(category));
        Ok(vec![RatedAllocation::new(category, None, hours, rate_per_hour)])
    }
}
