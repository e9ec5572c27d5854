//! Configuration types for the Shift Billing Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the structural
//! validation applied to rate tier groups at load time.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::calculation::DEFAULT_FALLBACK_RATE;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayCategory, EmployeeRate, HolidayCalendar, RateTier, clock_time};
use crate::store::InMemoryStore;

/// Engine-level settings from engine.yaml.
///
/// Both fields fall back to the built-in defaults when the file omits
/// them: a 19:00 weeknight threshold and the default fallback rate.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Clock time after which weekday hours bill as weeknight.
    #[serde(with = "clock_time", default = "default_weeknight_threshold")]
    pub weeknight_threshold: NaiveTime,
    /// Flat rate applied when no tiers match, in minor units per hour.
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: i64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weeknight_threshold: default_weeknight_threshold(),
            fallback_rate: DEFAULT_FALLBACK_RATE,
        }
    }
}

fn default_weeknight_threshold() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).expect("19:00 is a valid time")
}

fn default_fallback_rate() -> i64 {
    DEFAULT_FALLBACK_RATE
}

/// Tiers configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    /// All configured rate tiers, in any order.
    pub tiers: Vec<RateTier>,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Public-holiday dates.
    pub holidays: Vec<NaiveDate>,
}

/// Employee rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRatesConfig {
    /// Flat per-employee rate rows.
    pub employee_rates: Vec<EmployeeRate>,
}

/// The complete billing configuration loaded from YAML files.
///
/// This struct aggregates the engine settings and the reference data the
/// engine uses when it runs without an external store. Tier groups are
/// validated structurally on construction; a group whose bounded tiers
/// cannot cover a long shift is a consumption-time condition and is
/// reported during billing instead.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Engine-level settings.
    settings: EngineSettings,
    /// Rate tiers, sorted by company, shift type, and tier order.
    tiers: Vec<RateTier>,
    /// The public-holiday calendar.
    holidays: HolidayCalendar,
    /// Flat per-employee rate rows.
    employee_rates: Vec<EmployeeRate>,
}

impl BillingConfig {
    /// Creates a config from its component parts.
    ///
    /// # Returns
    ///
    /// Returns the validated config, or `InvalidTierConfig` when a tier
    /// carries a non-positive rate or hours cap, an inverted validity
    /// window, a duplicated tier order within its group, or an unbounded
    /// tier that is not the last of its group.
    pub fn new(
        settings: EngineSettings,
        tiers: Vec<RateTier>,
        holidays: HolidayCalendar,
        employee_rates: Vec<EmployeeRate>,
    ) -> EngineResult<Self> {
        validate_tiers(&tiers)?;

        let mut sorted_tiers = tiers;
        sorted_tiers.sort_by(|a, b| {
            (a.company_id.as_str(), a.shift_type.as_str(), a.tier_order)
                .cmp(&(b.company_id.as_str(), b.shift_type.as_str(), b.tier_order))
        });

        Ok(Self {
            settings,
            tiers: sorted_tiers,
            holidays,
            employee_rates,
        })
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns all configured rate tiers.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Returns the public-holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns all per-employee rate rows.
    pub fn employee_rates(&self) -> &[EmployeeRate] {
        &self.employee_rates
    }

    /// Converts the config's reference data into an in-memory store.
    pub fn into_store(self) -> InMemoryStore {
        InMemoryStore {
            tiers: self.tiers,
            holidays: self.holidays,
            employee_rates: self.employee_rates,
            shifts: Vec::new(),
        }
    }
}

/// Checks the structural rules for rate tier groups.
///
/// Tiers group by (company, shift type, day type, validity window), so
/// date-versioned runs of the same group validate independently.
fn validate_tiers(tiers: &[RateTier]) -> EngineResult<()> {
    let mut groups: HashMap<_, Vec<&RateTier>> = HashMap::new();

    for tier in tiers {
        if tier.rate_per_hour <= 0 {
            return Err(EngineError::InvalidTierConfig {
                group: group_label(tier),
                message: format!("tier {} has a non-positive rate", tier.tier_order),
            });
        }
        if tier.hours_in_tier.is_some_and(|hours| hours <= Decimal::ZERO) {
            return Err(EngineError::InvalidTierConfig {
                group: group_label(tier),
                message: format!("tier {} has a non-positive hours cap", tier.tier_order),
            });
        }
        if let (Some(from), Some(to)) = (tier.valid_from, tier.valid_to) {
            if from > to {
                return Err(EngineError::InvalidTierConfig {
                    group: group_label(tier),
                    message: format!(
                        "tier {} validity window ends before it starts",
                        tier.tier_order
                    ),
                });
            }
        }
        groups
            .entry((
                tier.company_id.as_str(),
                tier.shift_type.as_str(),
                tier.day_type,
                tier.valid_from,
                tier.valid_to,
            ))
            .or_default()
            .push(tier);
    }

    for group in groups.values_mut() {
        group.sort_by_key(|tier| tier.tier_order);

        for pair in group.windows(2) {
            if pair[0].tier_order == pair[1].tier_order {
                return Err(EngineError::InvalidTierConfig {
                    group: group_label(pair[0]),
                    message: format!("duplicate tier order {}", pair[0].tier_order),
                });
            }
        }

        if let Some(position) = group.iter().position(|tier| tier.is_unbounded()) {
            if group[position + 1..].iter().any(|tier| tier.is_unbounded()) {
                return Err(EngineError::InvalidTierConfig {
                    group: group_label(group[position]),
                    message: "more than one unbounded tier".to_string(),
                });
            }
            if position != group.len() - 1 {
                return Err(EngineError::InvalidTierConfig {
                    group: group_label(group[position]),
                    message: format!(
                        "unbounded tier {} must have the highest tier order",
                        group[position].tier_order
                    ),
                });
            }
        }
    }

    Ok(())
}

fn group_label(tier: &RateTier) -> String {
    let day_type = match tier.day_type {
        DayCategory::Weekday => "weekday",
        DayCategory::Weeknight => "weeknight",
        DayCategory::Saturday => "saturday",
        DayCategory::Sunday => "sunday",
        DayCategory::PublicHoliday => "public_holiday",
    };
    format!("{}/{}/{}", tier.company_id, tier.shift_type, day_type)
}
