//! Error types for catalog lookups

use crate::types::{IngredientId, OrderId, RecipeId};

/// Catalog lookup error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No ingredient with this ID
    #[error("ingredient not found: {0}")]
    IngredientNotFound(IngredientId),

    /// No recipe with this ID
    #[error("recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    /// No production order with this ID
    #[error("production order not found: {0}")]
    OrderNotFound(OrderId),
}
