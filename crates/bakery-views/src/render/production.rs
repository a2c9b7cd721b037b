//! Production page: recipes with BoM and the order schedule

use super::row;
use crate::config::ViewConfig;
use crate::format::{money, quantity};
use crate::page::ProductionTab;
use crate::state::UiState;
use bakery_advisor::AdvisoryState;
use bakery_catalog::{CatalogRepository, OrderStatus, Recipe};
use bakery_costing::{compute_cost, line_costs};

/// Statuses shown as schedule columns
const SCHEDULE_COLUMNS: [OrderStatus; 3] =
    [OrderStatus::Planned, OrderStatus::InProgress, OrderStatus::Completed];

fn header(active: ProductionTab) -> String {
    let mut out = String::new();
    out.push_str("Production Kitchen\n");
    out.push_str("Manage your delicious recipes and baking schedule.\n");
    let tabs: Vec<String> = [ProductionTab::Recipes, ProductionTab::Schedule]
        .into_iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();
    out.push_str(&tabs.join(" | "));
    out.push_str("\n\n");
    out
}

/// Render the recipes tab
#[must_use]
pub fn render_recipes(catalog: &dyn CatalogRepository, config: &ViewConfig, state: &UiState) -> String {
    let mut out = header(ProductionTab::Recipes);
    let advisory = state.advisory().state();

    for recipe in catalog.recipes() {
        let cost = compute_cost(recipe, catalog.ingredients(), &config.rates);
        let expanded = state.expanded_recipe() == Some(&recipe.id);
        out.push_str(&format!(
            "{} {} ({})\n    Ver {} | Yield: {} | {} hrs | Unit Cost {}\n",
            if expanded { "v" } else { ">" },
            recipe.name,
            recipe.id,
            recipe.version,
            recipe.yield_units,
            quantity(recipe.base_labor_hours),
            money(cost.unit_cost),
        ));
        if expanded {
            out.push_str(&render_bom(recipe, catalog));
            out.push_str(&render_ai_panel(recipe, &advisory));
        }
        out.push('\n');
    }
    out
}

fn render_bom(recipe: &Recipe, catalog: &dyn CatalogRepository) -> String {
    let mut out = String::from("\n    Ingredients (BoM)\n");
    out.push_str(&indent(&row(&[("Ingredient", 24), ("Quantity", 12), ("Est. Cost", 10)])));
    for line in line_costs(recipe, catalog.ingredients()) {
        let qty = match line.unit {
            Some(unit) => format!("{} {unit}", quantity(line.quantity)),
            None => quantity(line.quantity),
        };
        out.push_str(&indent(&row(&[
            (line.name.as_str(), 24),
            (qty.as_str(), 12),
            (money(line.estimated_cost).as_str(), 10),
        ])));
    }
    out
}

/// Render the AI Chef Assistant panel for an expanded recipe.
///
/// Ready and failed results are only shown on the recipe they belong to;
/// other recipes see the prompt, marked busy while a request is out.
#[must_use]
pub fn render_ai_panel(recipe: &Recipe, advisory: &AdvisoryState) -> String {
    let mut out = String::from("\n    AI Chef Assistant\n");
    let own = advisory.recipe() == Some(&recipe.id);
    match advisory {
        AdvisoryState::Loading { .. } if own => {
            out.push_str("    Analyzing market prices...\n");
        }
        AdvisoryState::Ready { advice, .. } if own => {
            out.push_str(&format!("    ANALYSIS: {}\n", advice.analysis));
            out.push_str(&format!("    SUGGESTION: {}\n", advice.suggestion));
            out.push_str(&format!("    Potential Savings: {}\n", advice.potential_savings));
            out.push_str("    [ Try Another Recipe ]\n");
        }
        AdvisoryState::Failed { message, .. } if own => {
            out.push_str(&format!("    {message}\n"));
            out.push_str("    [ Optimize Recipe ]\n");
        }
        AdvisoryState::Loading { .. } => {
            out.push_str(
                "    Need to lower costs? I can analyze market prices and suggest smart \
                 ingredient swaps!\n",
            );
            out.push_str("    [ Optimize Recipe ] (busy)\n");
        }
        _ => {
            out.push_str(
                "    Need to lower costs? I can analyze market prices and suggest smart \
                 ingredient swaps!\n",
            );
            out.push_str("    [ Optimize Recipe ]\n");
        }
    }
    out
}

/// Render the schedule tab
#[must_use]
pub fn render_schedule(catalog: &dyn CatalogRepository) -> String {
    let mut out = header(ProductionTab::Schedule);
    for status in SCHEDULE_COLUMNS {
        let orders: Vec<_> = catalog.orders().iter().filter(|o| o.status == status).collect();
        out.push_str(&format!("{} ({})\n", status.label(), orders.len()));
        for order in orders {
            let recipe_name = catalog
                .recipe(&order.recipe_id)
                .map_or_else(|| order.recipe_id.to_string(), |r| r.name.clone());
            let live = if order.status == OrderStatus::InProgress { " *" } else { "" };
            out.push_str(&format!("  {}{live}\n", order.id));
            out.push_str(&format!("    {recipe_name}\n"));
            out.push_str(&format!(
                "    Qty {} | Due {}\n",
                order.quantity_to_produce,
                order.due_date.format("%m-%d")
            ));
            if let Some(assignee) = &order.assigned_to {
                out.push_str(&format!("    {assignee}\n"));
            }
        }
        out.push('\n');
    }
    out
}

fn indent(line: &str) -> String {
    format!("    {line}")
}
