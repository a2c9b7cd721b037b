//! Offline advisor with fixed answers
//!
//! Used when no credential is configured. Never touches the network; it
//! waits a simulated delay and returns the same structure every time.

use crate::advisor::Advisor;
use crate::error::AdvisorError;
use crate::types::{Advice, DemandForecast, ForecastDay, Trend};
use async_trait::async_trait;
use bakery_catalog::{DailyOutput, Ingredient, Recipe};
use std::time::Duration;

/// Canned analysis text
pub const CANNED_ANALYSIS: &str =
    "Butter constitutes 45% of material cost. Current premium butter price is peaking.";

/// Canned suggestion text
pub const CANNED_SUGGESTION: &str = "Consider a blend of 80% Premium Butter and 20% High-Grade \
     Margarine for lamination layers 2 & 3. This maintains flavor profile while improving \
     structural stability.";

/// Canned savings estimate
pub const CANNED_SAVINGS: &str = "12.5%";

/// The fixed advice returned by `CannedAdvisor`
#[must_use]
pub fn canned_advice() -> Advice {
    Advice {
        analysis: CANNED_ANALYSIS.to_string(),
        suggestion: CANNED_SUGGESTION.to_string(),
        potential_savings: CANNED_SAVINGS.to_string(),
    }
}

/// The fixed forecast returned by `CannedAdvisor`
#[must_use]
pub fn canned_forecast() -> DemandForecast {
    let entry = |day: &str, predicted_qty: u32, reasoning: &str| ForecastDay {
        day: day.to_string(),
        predicted_qty,
        reasoning: reasoning.to_string(),
    };
    DemandForecast {
        forecast: vec![
            entry("Sat", 565, "Sunny weekend weather lifts croissant demand by about 15%."),
            entry("Sun", 540, "Weekend brunch orders stay high."),
            entry("Mon", 410, "Demand returns to the weekday baseline."),
        ],
        trend: Trend::Up,
    }
}

/// Advisor answering from fixed data after a delay
#[derive(Debug, Clone)]
pub struct CannedAdvisor {
    delay: Duration,
}

impl CannedAdvisor {
    /// Create advisor with simulated delay
    #[inline]
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CannedAdvisor {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl Advisor for CannedAdvisor {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn optimize_recipe(
        &self,
        recipe: &Recipe,
        _ingredients: &[Ingredient],
    ) -> Result<Advice, AdvisorError> {
        tracing::debug!(recipe = %recipe.id, delay = ?self.delay, "canned advice");
        tokio::time::sleep(self.delay).await;
        Ok(canned_advice())
    }

    async fn forecast_demand(&self, _history: &[DailyOutput]) -> Result<DemandForecast, AdvisorError> {
        tokio::time::sleep(self.delay).await;
        Ok(canned_forecast())
    }
}
