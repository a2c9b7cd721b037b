//! Bakery Catalog - static domain data
//!
//! Fixed tables of ingredients, recipes with their bill of materials,
//! production orders and inventory lots. Pure data; nothing is mutated at
//! runtime.
//!
//! # Example
//!
//! ```rust
//! use bakery_catalog::{CatalogRepository, RecipeId, StaticCatalog};
//!
//! let catalog = StaticCatalog::sample();
//! let croissant = catalog.recipe(&RecipeId::new("RCP-001")).unwrap();
//! assert_eq!(croissant.name, "Artisan Croissant");
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod integrity;
pub mod repository;
pub mod sample;
pub mod types;

// Re-exports for convenience
pub use error::CatalogError;
pub use integrity::{check_integrity, IntegrityIssue, IntegrityReport};
pub use repository::{CatalogRepository, StaticCatalog, StaticCatalogBuilder};
pub use sample::{LABOR_RATE_PER_HOUR, OVERHEAD_RATE_PER_HOUR};
pub use types::{
    BomLine, DailyOutput, Ingredient, IngredientId, Lot, LotId, OrderId, OrderStatus,
    ProductionOrder, Recipe, RecipeId, TransactionType, UnitOfMeasure,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the catalog
    pub use crate::{
        CatalogRepository, Ingredient, IngredientId, Lot, ProductionOrder, Recipe, RecipeId,
        StaticCatalog,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
