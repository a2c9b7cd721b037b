//! UI-side advisory session state
//!
//! At most one request is outstanding per session. Errors collapse to a
//! single user-facing message; the cause goes to the log.

use crate::advisor::Advisor;
use crate::error::AdvisorError;
use crate::types::Advice;
use bakery_catalog::{Ingredient, Recipe, RecipeId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Message shown for any advisory failure
pub const FAILURE_MESSAGE: &str = "Could not connect to AI service.";

/// Advisory panel state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdvisoryState {
    /// No request made yet, or reset
    #[default]
    Idle,
    /// Request outstanding
    Loading {
        /// Recipe being analyzed
        recipe: RecipeId,
    },
    /// Advice received
    Ready {
        /// Recipe the advice is for
        recipe: RecipeId,
        /// Advice
        advice: Advice,
    },
    /// Request failed; may be retried
    Failed {
        /// Recipe the request was for
        recipe: RecipeId,
        /// User-facing message
        message: String,
    },
}

impl AdvisoryState {
    /// Recipe the state refers to, if any
    #[must_use]
    pub fn recipe(&self) -> Option<&RecipeId> {
        match self {
            Self::Idle => None,
            Self::Loading { recipe } | Self::Ready { recipe, .. } | Self::Failed { recipe, .. } => {
                Some(recipe)
            }
        }
    }
}

/// Shared advisory session
///
/// Clones share the same state, so a spawned request can complete the
/// session the UI is reading.
#[derive(Debug, Clone, Default)]
pub struct AdvisorySession {
    state: Arc<Mutex<AdvisoryState>>,
}

impl AdvisorySession {
    /// Create idle session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> AdvisoryState {
        self.state.lock().clone()
    }

    /// Check if a request is outstanding
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(*self.state.lock(), AdvisoryState::Loading { .. })
    }

    /// Advice currently held, if any
    #[must_use]
    pub fn advice(&self) -> Option<Advice> {
        match &*self.state.lock() {
            AdvisoryState::Ready { advice, .. } => Some(advice.clone()),
            _ => None,
        }
    }

    /// Enter `Loading` for a recipe
    ///
    /// # Errors
    /// - `AdvisorError::RequestInFlight` if a request is already outstanding
    pub fn begin(&self, recipe: &RecipeId) -> Result<(), AdvisorError> {
        let mut state = self.state.lock();
        if let AdvisoryState::Loading { recipe: pending } = &*state {
            tracing::debug!(pending = %pending, requested = %recipe, "advisory request refused");
            return Err(AdvisorError::RequestInFlight);
        }
        *state = AdvisoryState::Loading {
            recipe: recipe.clone(),
        };
        Ok(())
    }

    /// Record the outcome of the outstanding request.
    ///
    /// A result arriving with no request outstanding is dropped.
    pub fn complete(&self, result: Result<Advice, AdvisorError>) -> AdvisoryState {
        let mut state = self.state.lock();
        let AdvisoryState::Loading { recipe } = &*state else {
            tracing::debug!("advisory result arrived with no request outstanding");
            return state.clone();
        };
        let recipe = recipe.clone();
        *state = match result {
            Ok(advice) => AdvisoryState::Ready { recipe, advice },
            Err(err) => {
                tracing::error!(recipe = %recipe, error = %err, "advisory request failed");
                AdvisoryState::Failed {
                    recipe,
                    message: FAILURE_MESSAGE.to_string(),
                }
            }
        };
        state.clone()
    }

    /// Run one request through the session
    ///
    /// # Errors
    /// - `AdvisorError::RequestInFlight` if a request is already outstanding
    pub async fn request(
        &self,
        advisor: &dyn Advisor,
        recipe: &Recipe,
        ingredients: &[Ingredient],
    ) -> Result<AdvisoryState, AdvisorError> {
        self.begin(&recipe.id)?;
        let result = advisor.optimize_recipe(recipe, ingredients).await;
        Ok(self.complete(result))
    }

    /// Return to `Idle` once the outstanding request has settled
    ///
    /// # Errors
    /// - `AdvisorError::RequestInFlight` while a request is outstanding; the
    ///   state is left untouched
    pub fn reset(&self) -> Result<(), AdvisorError> {
        let mut state = self.state.lock();
        if let AdvisoryState::Loading { recipe } = &*state {
            tracing::debug!(pending = %recipe, "advisory reset refused");
            return Err(AdvisorError::RequestInFlight);
        }
        *state = AdvisoryState::Idle;
        Ok(())
    }
}
