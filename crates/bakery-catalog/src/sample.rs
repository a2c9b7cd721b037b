//! Hardcoded sample tables for the demo bakery
//!
//! The tables are built once on first access and shared read-only.

use crate::types::{
    BomLine, DailyOutput, Ingredient, IngredientId, Lot, LotId, OrderId, OrderStatus,
    ProductionOrder, Recipe, RecipeId, UnitOfMeasure,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Labor rate per hour used when no configuration overrides it
pub const LABOR_RATE_PER_HOUR: f64 = 18.50;

/// Overhead rate per labor hour used when no configuration overrides it
pub const OVERHEAD_RATE_PER_HOUR: f64 = 25.00;

static INGREDIENTS: Lazy<Vec<Ingredient>> = Lazy::new(|| {
    vec![
        Ingredient::new("ING-001", "Premium Bread Flour", "RM-FL-01", UnitOfMeasure::Kg)
            .with_stock(450.0)
            .with_prices(1.20, 1.25)
            .with_expiry_alert_days(30),
        Ingredient::new("ING-002", "Unsalted Butter", "RM-DA-01", UnitOfMeasure::Kg)
            .with_stock(80.0)
            .with_prices(8.50, 8.75)
            .with_expiry_alert_days(14),
        Ingredient::new("ING-003", "Whole Milk", "RM-DA-02", UnitOfMeasure::Liter)
            .with_stock(120.0)
            .with_prices(1.10, 1.10)
            .with_expiry_alert_days(5),
        Ingredient::new("ING-004", "Cane Sugar", "RM-SW-01", UnitOfMeasure::Kg)
            .with_stock(200.0)
            .with_prices(0.90, 0.95)
            .with_expiry_alert_days(365),
        Ingredient::new("ING-005", "Organic Eggs", "RM-DA-03", UnitOfMeasure::Unit)
            .with_stock(1000.0)
            .with_prices(0.25, 0.28)
            .with_expiry_alert_days(10),
        Ingredient::new("ING-006", "Dark Chocolate 70%", "RM-CH-01", UnitOfMeasure::Kg)
            .with_stock(40.0)
            .with_prices(12.00, 12.50)
            .with_expiry_alert_days(180),
    ]
});

static RECIPES: Lazy<Vec<Recipe>> = Lazy::new(|| {
    vec![
        Recipe::new("RCP-001", "Artisan Croissant", "1.2")
            .with_yield(50)
            .with_labor_hours(4.0)
            .with_instructions(
                "Laminate dough with butter block. Chill for 2 hours between folds.",
            )
            .with_item(BomLine::new("ING-001", 2.5, 0.02))
            .with_item(BomLine::new("ING-002", 1.2, 0.01))
            .with_item(BomLine::new("ING-003", 0.8, 0.01))
            .with_item(BomLine::new("ING-004", 0.3, 0.0)),
        Recipe::new("RCP-002", "Pain au Chocolat", "1.0")
            .with_yield(40)
            .with_labor_hours(4.5)
            .with_instructions(
                "Standard croissant dough base. Insert chocolate batons before final roll.",
            )
            .with_item(BomLine::new("ING-001", 2.5, 0.02))
            .with_item(BomLine::new("ING-002", 1.2, 0.01))
            .with_item(BomLine::new("ING-006", 0.8, 0.0)),
    ]
});

static ORDERS: Lazy<Vec<ProductionOrder>> = Lazy::new(|| {
    vec![
        order("WO-2023-881", "RCP-001", OrderStatus::InProgress, 200, (10, 27), (10, 28), "Shift A"),
        order("WO-2023-882", "RCP-002", OrderStatus::Planned, 150, (10, 28), (10, 29), "Shift B"),
        order("WO-2023-880", "RCP-001", OrderStatus::Completed, 100, (10, 26), (10, 26), "Shift A"),
    ]
});

static LOTS: Lazy<Vec<Lot>> = Lazy::new(|| {
    vec![
        lot("LOT-BF-992", "ING-001", 200.0, date(2023, 10, 1), date(2024, 4, 1), 1.15),
        lot("LOT-BF-998", "ING-001", 250.0, date(2023, 10, 15), date(2024, 4, 15), 1.25),
        lot("LOT-MK-001", "ING-003", 120.0, date(2023, 10, 25), date(2023, 10, 31), 1.10),
    ]
});

static WEEKLY_OUTPUT: Lazy<Vec<DailyOutput>> = Lazy::new(|| {
    [("Mon", 400, 380), ("Tue", 300, 320), ("Wed", 450, 440), ("Thu", 380, 375), ("Fri", 500, 490)]
        .into_iter()
        .map(|(day, planned, actual)| DailyOutput {
            day: day.to_string(),
            planned,
            actual,
        })
        .collect()
});

/// Sample ingredient catalog
#[must_use]
pub fn ingredients() -> &'static [Ingredient] {
    &INGREDIENTS
}

/// Sample recipes
#[must_use]
pub fn recipes() -> &'static [Recipe] {
    &RECIPES
}

/// Sample production orders
#[must_use]
pub fn orders() -> &'static [ProductionOrder] {
    &ORDERS
}

/// Sample lots
#[must_use]
pub fn lots() -> &'static [Lot] {
    &LOTS
}

/// Planned vs. actual output for the current week
#[must_use]
pub fn weekly_output() -> &'static [DailyOutput] {
    &WEEKLY_OUTPUT
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid calendar dates")
}

fn order(
    id: &str,
    recipe_id: &str,
    status: OrderStatus,
    quantity_to_produce: u32,
    start: (u32, u32),
    due: (u32, u32),
    assigned_to: &str,
) -> ProductionOrder {
    ProductionOrder {
        id: OrderId::new(id),
        recipe_id: RecipeId::new(recipe_id),
        status,
        quantity_to_produce,
        start_date: date(2023, start.0, start.1),
        due_date: date(2023, due.0, due.1),
        assigned_to: Some(assigned_to.to_string()),
    }
}

fn lot(
    id: &str,
    ingredient_id: &str,
    quantity: f64,
    received_date: NaiveDate,
    expiry_date: NaiveDate,
    cost_basis: f64,
) -> Lot {
    Lot {
        id: LotId::new(id),
        ingredient_id: IngredientId::new(ingredient_id),
        quantity,
        received_date,
        expiry_date,
        cost_basis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tables_sizes() {
        assert_eq!(ingredients().len(), 6);
        assert_eq!(recipes().len(), 2);
        assert_eq!(orders().len(), 3);
        assert_eq!(lots().len(), 3);
        assert_eq!(weekly_output().len(), 5);
    }

    #[test]
    fn croissant_bom_matches_sample() {
        let croissant = &recipes()[0];
        assert_eq!(croissant.name, "Artisan Croissant");
        assert_eq!(croissant.yield_units, 50);
        assert_eq!(croissant.items.len(), 4);
        assert_eq!(croissant.items[1].ingredient_id, "ING-002");
        assert!((croissant.items[1].quantity - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn milk_lot_expires_end_of_october() {
        let milk = lots().iter().find(|l| l.id == "LOT-MK-001").unwrap();
        assert_eq!(milk.expiry_date, NaiveDate::from_ymd_opt(2023, 10, 31).unwrap());
    }
}
