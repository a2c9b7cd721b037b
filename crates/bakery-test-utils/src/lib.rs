//! Testing utilities for the bakery workspace
//!
//! Shared fixtures, catalog builders and proptest strategies.

#![allow(missing_docs)]

use bakery_catalog::{
    BomLine, Ingredient, IngredientId, Lot, LotId, OrderId, OrderStatus, ProductionOrder, Recipe,
    StaticCatalog, UnitOfMeasure,
};
use chrono::NaiveDate;
use proptest::prelude::*;

/// Fixed "today" used by inventory tests (two days before the milk lot expires)
pub fn demo_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 29).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn priced_ingredient(id: &str, standard_cost: f64) -> Ingredient {
    Ingredient::new(id, format!("Ingredient {id}"), format!("SKU-{id}"), UnitOfMeasure::Kg)
        .with_stock(500.0)
        .with_prices(standard_cost, standard_cost)
        .with_expiry_alert_days(30)
}

pub fn recipe_with_lines(id: &str, yield_units: u32, labor_hours: f64, lines: Vec<BomLine>) -> Recipe {
    lines.into_iter().fold(
        Recipe::new(id, format!("Recipe {id}"), "1.0")
            .with_yield(yield_units)
            .with_labor_hours(labor_hours),
        Recipe::with_item,
    )
}

pub fn lot(id: &str, ingredient_id: &str, expiry_date: NaiveDate) -> Lot {
    Lot {
        id: LotId::new(id),
        ingredient_id: IngredientId::new(ingredient_id),
        quantity: 100.0,
        received_date: date(2023, 10, 1),
        expiry_date,
        cost_basis: 1.0,
    }
}

pub fn order(id: &str, recipe_id: &str, status: OrderStatus) -> ProductionOrder {
    ProductionOrder {
        id: OrderId::new(id),
        recipe_id: recipe_id.into(),
        status,
        quantity_to_produce: 10,
        start_date: date(2023, 10, 27),
        due_date: date(2023, 10, 28),
        assigned_to: None,
    }
}

/// One-ingredient, one-recipe catalog
pub fn tiny_catalog() -> StaticCatalog {
    StaticCatalog::builder()
        .ingredient(priced_ingredient("ING-T1", 2.0))
        .recipe(recipe_with_lines("RCP-T1", 10, 1.0, vec![BomLine::new("ING-T1", 1.0, 0.0)]))
        .build()
}

/// Ingredients `ING-0`, `ING-1`, ... priced from `costs`
pub fn catalog_of(costs: &[f64]) -> Vec<Ingredient> {
    costs
        .iter()
        .enumerate()
        .map(|(i, cost)| priced_ingredient(&format!("ING-{i}"), *cost))
        .collect()
}

prop_compose! {
    /// Priced ingredients plus a recipe whose every line resolves
    pub fn resolvable_recipe()(
        costs in proptest::collection::vec(0.01f64..50.0, 1..8),
        raw_lines in proptest::collection::vec((0usize..8, 0.01f64..20.0, 0.0f64..0.25), 0..10),
        yield_units in 1u32..500,
        labor_hours in 0.0f64..12.0,
    ) -> (Vec<Ingredient>, Recipe) {
        let ingredients = catalog_of(&costs);
        let lines = raw_lines
            .into_iter()
            .map(|(idx, quantity, waste)| {
                BomLine::new(format!("ING-{}", idx % costs.len()), quantity, waste)
            })
            .collect();
        (ingredients, recipe_with_lines("RCP-P", yield_units, labor_hours, lines))
    }
}
