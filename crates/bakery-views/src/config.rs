//! Rendering configuration

use bakery_costing::CostRates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock and expiry thresholds for the inventory page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryThresholds {
    /// Stock strictly below this is flagged low
    pub low_stock_threshold: f64,
    /// Lots expiring in fewer days than this are flagged
    pub expiring_window_days: i64,
}

impl InventoryThresholds {
    /// Check if a stock level is low
    #[inline]
    #[must_use]
    pub fn is_low_stock(&self, stock: f64) -> bool {
        stock < self.low_stock_threshold
    }

    /// Check if a lot with this many days left is expiring
    #[inline]
    #[must_use]
    pub fn is_expiring(&self, days_to_expiry: i64) -> bool {
        days_to_expiry < self.expiring_window_days
    }
}

impl Default for InventoryThresholds {
    fn default() -> Self {
        Self {
            low_stock_threshold: 100.0,
            expiring_window_days: 30,
        }
    }
}

/// Inputs every renderer shares besides the catalog and UI state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Rates for recipe costing
    pub rates: CostRates,
    /// Inventory flags
    pub inventory: InventoryThresholds,
    /// Reference date for days-to-expiry
    pub today: NaiveDate,
    /// Always show the sidebar body
    pub wide_layout: bool,
}

impl ViewConfig {
    /// Create configuration with default rates and thresholds
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            rates: CostRates::default(),
            inventory: InventoryThresholds::default(),
            today,
            wide_layout: true,
        }
    }

    /// With cost rates
    #[inline]
    #[must_use]
    pub fn with_rates(mut self, rates: CostRates) -> Self {
        self.rates = rates;
        self
    }

    /// With inventory thresholds
    #[inline]
    #[must_use]
    pub fn with_inventory(mut self, inventory: InventoryThresholds) -> Self {
        self.inventory = inventory;
        self
    }

    /// With narrow layout: the sidebar body only shows when opened
    #[inline]
    #[must_use]
    pub fn narrow(mut self) -> Self {
        self.wide_layout = false;
        self
    }
}
