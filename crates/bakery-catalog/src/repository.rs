//! Catalog repository
//!
//! Decouples data access from presentation:
//! - `CatalogRepository` exposes load-by-id and list-all lookups
//! - `StaticCatalog` is the in-memory implementation backing the demo

use crate::error::CatalogError;
use crate::sample;
use crate::types::{
    DailyOutput, Ingredient, IngredientId, Lot, OrderId, ProductionOrder, Recipe, RecipeId,
};

/// Read-only access to catalog records
pub trait CatalogRepository: Send + Sync {
    /// All ingredients, in catalog order
    fn ingredients(&self) -> &[Ingredient];

    /// All recipes, in catalog order
    fn recipes(&self) -> &[Recipe];

    /// All production orders, in catalog order
    fn orders(&self) -> &[ProductionOrder];

    /// All lots, in catalog order
    fn lots(&self) -> &[Lot];

    /// Planned vs. actual output history
    fn weekly_output(&self) -> &[DailyOutput];

    /// Ingredient by ID
    fn ingredient(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.ingredients().iter().find(|i| &i.id == id)
    }

    /// Recipe by ID
    fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes().iter().find(|r| &r.id == id)
    }

    /// Production order by ID
    fn order(&self, id: &OrderId) -> Option<&ProductionOrder> {
        self.orders().iter().find(|o| &o.id == id)
    }

    /// Lots received for one ingredient
    fn lots_for(&self, id: &IngredientId) -> Vec<&Lot> {
        self.lots().iter().filter(|l| &l.ingredient_id == id).collect()
    }

    /// Recipe by ID, or `CatalogError::RecipeNotFound`
    ///
    /// # Errors
    /// - `CatalogError::RecipeNotFound` if no recipe has this ID
    fn require_recipe(&self, id: &RecipeId) -> Result<&Recipe, CatalogError> {
        self.recipe(id)
            .ok_or_else(|| CatalogError::RecipeNotFound(id.clone()))
    }

    /// Ingredient by ID, or `CatalogError::IngredientNotFound`
    ///
    /// # Errors
    /// - `CatalogError::IngredientNotFound` if no ingredient has this ID
    fn require_ingredient(&self, id: &IngredientId) -> Result<&Ingredient, CatalogError> {
        self.ingredient(id)
            .ok_or_else(|| CatalogError::IngredientNotFound(id.clone()))
    }

    /// Production order by ID, or `CatalogError::OrderNotFound`
    ///
    /// # Errors
    /// - `CatalogError::OrderNotFound` if no order has this ID
    fn require_order(&self, id: &OrderId) -> Result<&ProductionOrder, CatalogError> {
        self.order(id)
            .ok_or_else(|| CatalogError::OrderNotFound(id.clone()))
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    orders: Vec<ProductionOrder>,
    lots: Vec<Lot>,
    weekly_output: Vec<DailyOutput>,
}

impl StaticCatalog {
    /// Catalog holding the demo bakery's sample tables
    #[must_use]
    pub fn sample() -> Self {
        Self {
            ingredients: sample::ingredients().to_vec(),
            recipes: sample::recipes().to_vec(),
            orders: sample::orders().to_vec(),
            lots: sample::lots().to_vec(),
            weekly_output: sample::weekly_output().to_vec(),
        }
    }

    /// Start an empty catalog
    #[inline]
    #[must_use]
    pub fn builder() -> StaticCatalogBuilder {
        StaticCatalogBuilder::default()
    }
}

impl CatalogRepository for StaticCatalog {
    fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn orders(&self) -> &[ProductionOrder] {
        &self.orders
    }

    fn lots(&self) -> &[Lot] {
        &self.lots
    }

    fn weekly_output(&self) -> &[DailyOutput] {
        &self.weekly_output
    }
}

/// Builder for arbitrary catalogs
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogBuilder {
    inner: StaticCatalog,
}

impl StaticCatalogBuilder {
    /// Add ingredient
    #[inline]
    #[must_use]
    pub fn ingredient(mut self, ingredient: Ingredient) -> Self {
        self.inner.ingredients.push(ingredient);
        self
    }

    /// Add recipe
    #[inline]
    #[must_use]
    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.inner.recipes.push(recipe);
        self
    }

    /// Add production order
    #[inline]
    #[must_use]
    pub fn order(mut self, order: ProductionOrder) -> Self {
        self.inner.orders.push(order);
        self
    }

    /// Add lot
    #[inline]
    #[must_use]
    pub fn lot(mut self, lot: Lot) -> Self {
        self.inner.lots.push(lot);
        self
    }

    /// Add a day of output history
    #[inline]
    #[must_use]
    pub fn output(mut self, output: DailyOutput) -> Self {
        self.inner.weekly_output.push(output);
        self
    }

    /// Finish building
    #[inline]
    #[must_use]
    pub fn build(self) -> StaticCatalog {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitOfMeasure;

    #[test]
    fn sample_lookup_by_id() {
        let catalog = StaticCatalog::sample();
        let butter = catalog.ingredient(&IngredientId::new("ING-002")).unwrap();
        assert_eq!(butter.name, "Unsalted Butter");
        assert!(catalog.recipe(&RecipeId::new("RCP-404")).is_none());
    }

    #[test]
    fn lots_for_filters_by_ingredient() {
        let catalog = StaticCatalog::sample();
        let flour_lots = catalog.lots_for(&IngredientId::new("ING-001"));
        assert_eq!(flour_lots.len(), 2);
        assert!(catalog.lots_for(&IngredientId::new("ING-006")).is_empty());
    }

    #[test]
    fn require_recipe_reports_missing_id() {
        let catalog = StaticCatalog::sample();
        let err = catalog.require_recipe(&RecipeId::new("RCP-404")).unwrap_err();
        assert_eq!(err, CatalogError::RecipeNotFound(RecipeId::new("RCP-404")));
    }

    #[test]
    fn builder_collects_records() {
        let catalog = StaticCatalog::builder()
            .ingredient(Ingredient::new("ING-X", "Salt", "RM-SA-01", UnitOfMeasure::Gram))
            .recipe(Recipe::new("RCP-X", "Pretzel", "0.1"))
            .build();
        assert_eq!(catalog.ingredients().len(), 1);
        assert_eq!(catalog.recipes().len(), 1);
        assert!(catalog.orders().is_empty());
    }
}
