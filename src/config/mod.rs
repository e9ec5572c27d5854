//! Configuration loading and management for the Shift Billing Engine.
//!
//! This module provides functionality to load billing configurations from
//! YAML files, including engine settings, tiered rates, the public-holiday
//! calendar, and flat per-employee rates.
//!
//! # Example
//!
//! ```no_run
//! use billing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Configured tiers: {}", config.config().tiers().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BillingConfig, EmployeeRatesConfig, EngineSettings, HolidaysConfig, TiersConfig,
};
