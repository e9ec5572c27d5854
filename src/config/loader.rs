//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading billing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;
use crate::store::InMemoryStore;

use super::types::{
    BillingConfig, EmployeeRatesConfig, EngineSettings, HolidaysConfig, TiersConfig,
};

/// Loads and provides access to billing configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the validated [`BillingConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml          # Engine settings
/// ├── tiers.yaml           # Tiered rate configuration
/// ├── holidays.yaml        # Public-holiday calendar
/// └── employee_rates.yaml  # Flat per-employee rates
/// ```
///
/// # Example
///
/// ```no_run
/// use billing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Fallback rate: {}", loader.settings().fallback_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BillingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tier configuration fails structural validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use billing_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), billing_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load engine.yaml
        let engine_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&engine_path)?;

        // Load tiers.yaml
        let tiers_path = path.join("tiers.yaml");
        let tiers_config = Self::load_yaml::<TiersConfig>(&tiers_path)?;

        // Load holidays.yaml
        let holidays_path = path.join("holidays.yaml");
        let holidays_config = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;

        // Load employee_rates.yaml
        let rates_path = path.join("employee_rates.yaml");
        let rates_config = Self::load_yaml::<EmployeeRatesConfig>(&rates_path)?;

        let config = BillingConfig::new(
            settings,
            tiers_config.tiers,
            HolidayCalendar::from_dates(holidays_config.holidays),
            rates_config.employee_rates,
        )?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying billing configuration.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Converts the loaded configuration into an in-memory store.
    pub fn into_store(self) -> InMemoryStore {
        self.config.into_store()
    }
}
