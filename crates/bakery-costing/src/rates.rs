//! Flat labor and overhead rates

use crate::error::CostingError;
use bakery_catalog::{LABOR_RATE_PER_HOUR, OVERHEAD_RATE_PER_HOUR};
use serde::{Deserialize, Serialize};

/// Hourly rates applied uniformly to every recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Direct labor cost per hour
    pub labor_rate_per_hour: f64,
    /// Indirect cost allocated per labor hour
    pub overhead_rate_per_hour: f64,
}

impl CostRates {
    /// Create rates
    #[inline]
    #[must_use]
    pub fn new(labor_rate_per_hour: f64, overhead_rate_per_hour: f64) -> Self {
        Self {
            labor_rate_per_hour,
            overhead_rate_per_hour,
        }
    }

    /// Combined cost of one labor hour
    #[inline]
    #[must_use]
    pub fn hourly_total(&self) -> f64 {
        self.labor_rate_per_hour + self.overhead_rate_per_hour
    }

    /// Reject negative or non-finite rates
    ///
    /// # Errors
    /// - `CostingError::InvalidRate` naming the first bad rate
    pub fn validate(&self) -> Result<(), CostingError> {
        for (name, value) in [
            ("labor_rate_per_hour", self.labor_rate_per_hour),
            ("overhead_rate_per_hour", self.overhead_rate_per_hour),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CostingError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

impl Default for CostRates {
    fn default() -> Self {
        Self::new(LABOR_RATE_PER_HOUR, OVERHEAD_RATE_PER_HOUR)
    }
}
