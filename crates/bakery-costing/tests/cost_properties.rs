use bakery_catalog::{sample, BomLine, RecipeId};
use bakery_costing::{compute_cost, compute_cost_checked, CostRates, CostingError};
use bakery_test_utils::{priced_ingredient, recipe_with_lines, resolvable_recipe};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn prop_unit_cost_follows_closed_form(
        (ingredients, recipe) in resolvable_recipe(),
        labor in 0.0f64..60.0,
        overhead in 0.0f64..60.0,
    ) {
        let rates = CostRates::new(labor, overhead);
        let cost = compute_cost(&recipe, &ingredients, &rates);

        let line_sum: f64 = recipe
            .items
            .iter()
            .map(|line| {
                let ingredient = ingredients.iter().find(|i| i.id == line.ingredient_id).unwrap();
                ingredient.standard_cost * line.quantity * (1.0 + line.waste_percentage)
            })
            .sum();
        let expected = (line_sum + recipe.base_labor_hours * (labor + overhead))
            / f64::from(recipe.yield_units);

        prop_assert!(close(cost.unit_cost, expected), "{} != {}", cost.unit_cost, expected);
        prop_assert!(close(cost.total_cost, cost.material_cost + cost.labor_cost + cost.overhead_cost));
    }

    #[test]
    fn prop_compute_cost_is_idempotent((ingredients, recipe) in resolvable_recipe()) {
        let rates = CostRates::default();
        let first = compute_cost(&recipe, &ingredients, &rates);
        let second = compute_cost(&recipe, &ingredients, &rates);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_checked_agrees_when_everything_resolves((ingredients, recipe) in resolvable_recipe()) {
        let rates = CostRates::default();
        let plain = compute_cost(&recipe, &ingredients, &rates);
        let checked = compute_cost_checked(&recipe, &ingredients, &rates).unwrap();
        prop_assert_eq!(plain, checked);
    }

    #[test]
    fn prop_waste_never_lowers_material_cost(
        cost in 0.01f64..50.0,
        quantity in 0.01f64..20.0,
        waste in 0.0f64..1.0,
    ) {
        let ingredients = vec![priced_ingredient("ING-W", cost)];
        let lean = recipe_with_lines("RCP-W", 1, 0.0, vec![BomLine::new("ING-W", quantity, 0.0)]);
        let wasteful = recipe_with_lines("RCP-W", 1, 0.0, vec![BomLine::new("ING-W", quantity, waste)]);
        let rates = CostRates::default();
        prop_assert!(
            compute_cost(&wasteful, &ingredients, &rates).material_cost
                >= compute_cost(&lean, &ingredients, &rates).material_cost
        );
    }
}

#[test]
fn sample_recipes_cost_the_same_through_both_paths() {
    let rates = CostRates::default();
    for recipe in sample::recipes() {
        let plain = compute_cost(recipe, sample::ingredients(), &rates);
        let checked = compute_cost_checked(recipe, sample::ingredients(), &rates).unwrap();
        assert_eq!(plain, checked, "recipe {}", recipe.id);
    }
}

#[test]
fn checked_rejects_invalid_rates_before_data() {
    let recipe = recipe_with_lines("RCP-0", 0, 1.0, vec![]);
    let err = compute_cost_checked(&recipe, &[], &CostRates::new(f64::INFINITY, 0.0)).unwrap_err();
    assert!(matches!(err, CostingError::InvalidRate { .. }));

    let err = compute_cost_checked(&recipe, &[], &CostRates::default()).unwrap_err();
    assert_eq!(err, CostingError::ZeroYield(RecipeId::new("RCP-0")));
}

#[test]
fn breakdown_serializes_for_display() {
    let cost = compute_cost(&sample::recipes()[0], sample::ingredients(), &CostRates::default());
    let json = serde_json::to_value(cost).unwrap();
    assert_eq!(json["laborCost"], 74.0);
    assert_eq!(json["overheadCost"], 100.0);
    assert!(json["unitCost"].as_f64().unwrap() > 3.77);
    assert!(cost.material_share() > 0.0 && cost.material_share() < 1.0);
}
