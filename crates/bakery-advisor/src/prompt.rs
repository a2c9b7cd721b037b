//! Prompt assembly for the generative-text service

use bakery_catalog::{DailyOutput, Ingredient, Recipe, UnitOfMeasure};
use serde::Serialize;

#[derive(Serialize)]
struct PromptLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<UnitOfMeasure>,
}

/// Recipe lines resolved against the catalog, as compact JSON
#[must_use]
pub fn recipe_lines_json(recipe: &Recipe, ingredients: &[Ingredient]) -> String {
    let lines: Vec<PromptLine<'_>> = recipe
        .items
        .iter()
        .map(|line| {
            let ingredient = ingredients.iter().find(|i| i.id == line.ingredient_id);
            PromptLine {
                name: ingredient.map(|i| i.name.as_str()),
                quantity: line.quantity,
                unit: ingredient.map(|i| i.unit),
            }
        })
        .collect();
    serde_json::to_string(&lines).unwrap_or_else(|_| "[]".to_string())
}

/// Market price list: `Name (Cost: $1.2/KG), ...`
#[must_use]
pub fn price_list(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|i| format!("{} (Cost: ${}/{})", i.name, i.standard_cost, i.unit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt asking for cost-reduction advice on one recipe
#[must_use]
pub fn optimization_prompt(recipe: &Recipe, ingredients: &[Ingredient]) -> String {
    format!(
        "You are a bakery consultant with a food-science background.\n\
         Review the recipe below and find ways to lower its cost without hurting quality.\n\
         \n\
         Recipe: {name} (Yield: {yield_units})\n\
         Ingredients used per batch:\n\
         {lines}\n\
         \n\
         Ingredient prices on the market:\n\
         {prices}\n\
         \n\
         Answer with a JSON object holding:\n\
         - analysis (string): short analysis of what drives the current cost.\n\
         - suggestion (string): concrete advice to cut cost, such as a substitution or less waste.\n\
         - potentialSavings (string): estimated savings as a percentage.\n",
        name = recipe.name,
        yield_units = recipe.yield_units,
        lines = recipe_lines_json(recipe, ingredients),
        prices = price_list(ingredients),
    )
}

/// Prompt asking for a three-day demand forecast
#[must_use]
pub fn forecast_prompt(history: &[DailyOutput]) -> String {
    let data = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());
    format!(
        "You are a supply chain analyst for a bakery.\n\
         Using the sales history below, predict demand for the next 3 days.\n\
         \n\
         Data: {data}\n\
         \n\
         Answer with a JSON object holding:\n\
         - forecast: array of objects {{ day: string, predictedQty: number, reasoning: string }}\n\
         - trend: \"UP\", \"DOWN\" or \"STABLE\"\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_catalog::{sample, BomLine};

    #[test]
    fn price_list_formats_every_ingredient() {
        let list = price_list(sample::ingredients());
        assert!(list.starts_with("Premium Bread Flour (Cost: $1.2/KG), Unsalted Butter (Cost: $8.5/KG)"));
        assert_eq!(list.matches("Cost: $").count(), 6);
    }

    #[test]
    fn recipe_lines_resolve_names_and_units() {
        let json = recipe_lines_json(&sample::recipes()[0], sample::ingredients());
        assert!(json.starts_with(r#"[{"name":"Premium Bread Flour","quantity":2.5,"unit":"KG"}"#));
    }

    #[test]
    fn unresolved_line_omits_name_and_unit() {
        let recipe = Recipe::new("RCP-X", "X", "1").with_item(BomLine::new("ING-404", 1.5, 0.0));
        assert_eq!(recipe_lines_json(&recipe, sample::ingredients()), r#"[{"quantity":1.5}]"#);
    }

    #[test]
    fn optimization_prompt_embeds_recipe() {
        let prompt = optimization_prompt(&sample::recipes()[0], sample::ingredients());
        assert!(prompt.contains("Recipe: Artisan Croissant (Yield: 50)"));
        assert!(prompt.contains("Dark Chocolate 70% (Cost: $12/KG)"));
        assert!(prompt.contains("potentialSavings"));
    }

    #[test]
    fn forecast_prompt_embeds_history() {
        let prompt = forecast_prompt(sample::weekly_output());
        assert!(prompt.contains(r#"{"day":"Mon","planned":400,"actual":380}"#));
    }
}
