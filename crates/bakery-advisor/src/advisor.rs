//! Advisor capability
//!
//! The canned and live advisors are interchangeable implementations of
//! the same contract; `advisor_from_config` picks one.

use crate::canned::CannedAdvisor;
use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::gemini::GeminiAdvisor;
use crate::types::{Advice, DemandForecast};
use async_trait::async_trait;
use bakery_catalog::{DailyOutput, Ingredient, Recipe};
use std::fmt::Debug;
use std::sync::Arc;

/// Source of recipe advice and demand forecasts
#[async_trait]
pub trait Advisor: Send + Sync + Debug {
    /// Short name for logs and the UI (`canned`, `gemini`)
    fn name(&self) -> &'static str;

    /// Cost-reduction advice for one recipe
    ///
    /// # Errors
    /// Any transport, status or parse failure
    async fn optimize_recipe(
        &self,
        recipe: &Recipe,
        ingredients: &[Ingredient],
    ) -> Result<Advice, AdvisorError>;

    /// Demand forecast from recent output history
    ///
    /// # Errors
    /// Any transport, status or parse failure
    async fn forecast_demand(&self, history: &[DailyOutput]) -> Result<DemandForecast, AdvisorError>;
}

/// Build the advisor for this configuration.
///
/// Without a credential the canned advisor is returned; this is a
/// supported configuration, not an error.
///
/// # Errors
/// - `AdvisorError::Transport` if the HTTP client cannot be built
pub fn advisor_from_config(config: &AdvisorConfig) -> Result<Arc<dyn Advisor>, AdvisorError> {
    if config.credential().is_none() {
        tracing::info!("no API key configured, using canned advisor");
        return Ok(Arc::new(CannedAdvisor::new(config.simulated_delay())));
    }
    tracing::info!(model = %config.model, "using live advisor");
    Ok(Arc::new(GeminiAdvisor::new(config.clone())?))
}
