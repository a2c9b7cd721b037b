//! Error types for checked cost computation

use bakery_catalog::{IngredientId, RecipeId};

/// Costing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostingError {
    /// BoM line references an ingredient missing from the catalog
    #[error("recipe {recipe}: ingredient {ingredient} not in catalog")]
    UnresolvedIngredient {
        /// Recipe being costed
        recipe: RecipeId,
        /// Missing ingredient
        ingredient: IngredientId,
    },

    /// Unit cost cannot be computed for a zero yield
    #[error("recipe {0}: yield is zero, unit cost undefined")]
    ZeroYield(RecipeId),

    /// Configured rate is negative or not finite
    #[error("invalid rate {name}: {value}")]
    InvalidRate {
        /// Rate field name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

impl CostingError {
    /// Check if the error comes from catalog data rather than configuration
    #[inline]
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::UnresolvedIngredient { .. } | Self::ZeroYield(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costing_error_display() {
        let err = CostingError::ZeroYield(RecipeId::new("RCP-007"));
        assert!(err.to_string().contains("RCP-007"));
        assert!(err.is_data_integrity());
        let rate = CostingError::InvalidRate {
            name: "labor_rate_per_hour",
            value: -1.0,
        };
        assert!(!rate.is_data_integrity());
    }
}
