//! Recipe cost roll-up
//!
//! Material cost sums `standard_cost × quantity × (1 + waste)` over the
//! BoM; labor and overhead are flat hourly rates over the recipe's labor
//! hours. Every function here is pure.

use crate::error::CostingError;
use crate::rates::CostRates;
use bakery_catalog::{Ingredient, IngredientId, Recipe, UnitOfMeasure};
use serde::{Deserialize, Serialize};

/// Cost of one batch and of one produced unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Ingredients including processing waste
    pub material_cost: f64,
    /// Direct labor
    pub labor_cost: f64,
    /// Allocated overhead
    pub overhead_cost: f64,
    /// Material + labor + overhead
    pub total_cost: f64,
    /// Total divided by yield; not finite for a zero yield
    pub unit_cost: f64,
}

impl CostBreakdown {
    /// Unit cost when it is a finite number
    #[inline]
    #[must_use]
    pub fn finite_unit_cost(&self) -> Option<f64> {
        self.unit_cost.is_finite().then_some(self.unit_cost)
    }

    /// Share of the batch total spent on materials
    #[must_use]
    pub fn material_share(&self) -> f64 {
        if self.total_cost > 0.0 {
            self.material_cost / self.total_cost
        } else {
            0.0
        }
    }
}

/// One BoM line as shown in the recipe ingredient table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCost {
    /// Referenced ingredient
    pub ingredient_id: IngredientId,
    /// Ingredient name, or the raw ID when it does not resolve
    pub name: String,
    /// Quantity per batch
    pub quantity: f64,
    /// Unit, when the ingredient resolves
    pub unit: Option<UnitOfMeasure>,
    /// `standard_cost × quantity`, without waste
    pub estimated_cost: f64,
}

/// Compute the cost breakdown of one batch.
///
/// A BoM line whose ingredient is missing from `ingredients` contributes
/// zero and is logged. A zero yield produces a non-finite unit cost.
#[must_use]
pub fn compute_cost(recipe: &Recipe, ingredients: &[Ingredient], rates: &CostRates) -> CostBreakdown {
    let mut material_cost = 0.0;
    for line in &recipe.items {
        match find(ingredients, &line.ingredient_id) {
            Some(ingredient) => {
                material_cost +=
                    ingredient.standard_cost * line.quantity * (1.0 + line.waste_percentage);
            }
            None => {
                tracing::warn!(
                    recipe = %recipe.id,
                    ingredient = %line.ingredient_id,
                    "BoM ingredient not in catalog, costed at zero"
                );
            }
        }
    }

    let breakdown = finish(recipe, material_cost, rates);
    tracing::debug!(
        recipe = %recipe.id,
        material = breakdown.material_cost,
        total = breakdown.total_cost,
        unit = breakdown.unit_cost,
        "computed recipe cost"
    );
    breakdown
}

/// Compute the cost breakdown, rejecting incomplete data.
///
/// # Errors
/// - `CostingError::InvalidRate` if a rate is negative or not finite
/// - `CostingError::ZeroYield` if the recipe yields nothing
/// - `CostingError::UnresolvedIngredient` for the first BoM line whose
///   ingredient is missing
pub fn compute_cost_checked(
    recipe: &Recipe,
    ingredients: &[Ingredient],
    rates: &CostRates,
) -> Result<CostBreakdown, CostingError> {
    rates.validate()?;
    if recipe.yield_units == 0 {
        return Err(CostingError::ZeroYield(recipe.id.clone()));
    }

    let mut material_cost = 0.0;
    for line in &recipe.items {
        let ingredient = find(ingredients, &line.ingredient_id).ok_or_else(|| {
            CostingError::UnresolvedIngredient {
                recipe: recipe.id.clone(),
                ingredient: line.ingredient_id.clone(),
            }
        })?;
        material_cost += ingredient.standard_cost * line.quantity * (1.0 + line.waste_percentage);
    }

    Ok(finish(recipe, material_cost, rates))
}

/// Rows of the recipe ingredient table, in BoM order
#[must_use]
pub fn line_costs(recipe: &Recipe, ingredients: &[Ingredient]) -> Vec<LineCost> {
    recipe
        .items
        .iter()
        .map(|line| {
            let ingredient = find(ingredients, &line.ingredient_id);
            LineCost {
                ingredient_id: line.ingredient_id.clone(),
                name: ingredient.map_or_else(|| line.ingredient_id.to_string(), |i| i.name.clone()),
                quantity: line.quantity,
                unit: ingredient.map(|i| i.unit),
                estimated_cost: ingredient.map_or(0.0, |i| i.standard_cost) * line.quantity,
            }
        })
        .collect()
}

fn find<'a>(ingredients: &'a [Ingredient], id: &IngredientId) -> Option<&'a Ingredient> {
    ingredients.iter().find(|i| &i.id == id)
}

fn finish(recipe: &Recipe, material_cost: f64, rates: &CostRates) -> CostBreakdown {
    let labor_cost = recipe.base_labor_hours * rates.labor_rate_per_hour;
    let overhead_cost = recipe.base_labor_hours * rates.overhead_rate_per_hour;
    let total_cost = material_cost + (labor_cost + overhead_cost);
    CostBreakdown {
        material_cost,
        labor_cost,
        overhead_cost,
        total_cost,
        unit_cost: total_cost / f64::from(recipe.yield_units),
    }
}
