//! Console configuration
//!
//! Reads an optional TOML file:
//!
//! ```toml
//! [costing]
//! labor_rate_per_hour = 18.5
//! overhead_rate_per_hour = 25.0
//!
//! [inventory]
//! low_stock_threshold = 100.0
//! expiring_window_days = 30
//!
//! [advisor]
//! model = "gemini-2.5-flash"
//! simulated_delay_ms = 2000
//! request_timeout_secs = 30
//! ```
//!
//! The credential never comes from the file; `API_KEY` overlays it.

use bakery_advisor::AdvisorConfig;
use bakery_costing::{CostRates, CostingError};
use bakery_views::{InventoryThresholds, ViewConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "BAKERY_CONFIG";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse config {}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Cost rate out of range
    #[error(transparent)]
    InvalidRate(#[from] CostingError),

    /// Inventory threshold out of range
    #[error("invalid {name}: {value}")]
    InvalidThreshold {
        /// Setting name
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Console configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Labor and overhead rates
    pub costing: CostRates,
    /// Low-stock and expiry flags
    pub inventory: InventoryThresholds,
    /// Advisory service
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    /// Load from a TOML file and validate
    ///
    /// # Errors
    /// - `ConfigError::Read` if the file cannot be read
    /// - `ConfigError::Parse` if it is not valid TOML for this schema
    /// - `ConfigError::InvalidRate` / `InvalidThreshold` on out-of-range values
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Config file to use: the explicit path, else the `BAKERY_CONFIG` value
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
    }

    /// Load the resolved file, or defaults when none is named; then overlay
    /// the credential from the environment
    ///
    /// # Errors
    /// Any `ConfigError` from `load`
    pub fn from_sources(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match Self::resolve_path(explicit, std::env::var(CONFIG_ENV).ok()) {
            Some(path) => Self::load(&path)?,
            None => {
                tracing::debug!("no config file, using defaults");
                Self::default()
            }
        };
        Ok(config.with_env())
    }

    /// Overlay the advisor credential from `API_KEY`
    #[must_use]
    pub fn with_env(mut self) -> Self {
        self.advisor = self.advisor.with_env();
        self
    }

    /// Check value ranges
    ///
    /// # Errors
    /// - `ConfigError::InvalidRate` for negative or non-finite rates
    /// - `ConfigError::InvalidThreshold` for a negative or non-finite
    ///   low-stock threshold
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.costing.validate()?;
        let threshold = self.inventory.low_stock_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name: "low_stock_threshold",
                value: threshold,
            });
        }
        Ok(())
    }

    /// Rendering configuration for a given date
    #[must_use]
    pub fn view_config(&self, today: NaiveDate) -> ViewConfig {
        ViewConfig::new(today)
            .with_rates(self.costing)
            .with_inventory(self.inventory)
    }
}
