//! One-shot commands
//!
//! Each command returns its stdout text so the binary only prints.

use anyhow::{bail, Context, Result};
use bakery_advisor::{Advisor, AdvisorySession, AdvisoryState, DemandForecast};
use bakery_catalog::{check_integrity, CatalogRepository, RecipeId};
use bakery_costing::{compute_cost, compute_cost_checked, CostBreakdown, CostRates};
use bakery_views::{render, Page, ProductionTab, UiState, ViewConfig};
use serde::Serialize;

/// Options of the `show` command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Page ID
    pub page: String,
    /// Production tab
    pub tab: Option<ProductionTab>,
    /// Recipe to expand
    pub expand: Option<RecipeId>,
    /// Open the sidebar
    pub sidebar: bool,
}

/// Render one page inside the layout
#[must_use]
pub fn show(catalog: &dyn CatalogRepository, config: &ViewConfig, options: &ShowOptions) -> String {
    let mut state = UiState::new();
    state.navigate(Page::select(&options.page));
    if let Some(tab) = options.tab {
        state.set_tab(tab);
    }
    if let Some(id) = &options.expand {
        state.toggle_recipe(id);
    }
    if options.sidebar {
        state.toggle_sidebar();
    }
    render(catalog, config, &state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CostReport<'a> {
    recipe_id: &'a RecipeId,
    name: &'a str,
    yield_units: u32,
    #[serde(flatten)]
    breakdown: CostBreakdown,
}

/// Cost breakdown of one recipe, as text or JSON
///
/// # Errors
/// - unknown recipe
/// - with `strict`, any `CostingError` from the checked calculator
pub fn cost(
    catalog: &dyn CatalogRepository,
    rates: &CostRates,
    recipe_id: &RecipeId,
    json: bool,
    strict: bool,
) -> Result<String> {
    let recipe = catalog.require_recipe(recipe_id)?;
    let breakdown = if strict {
        compute_cost_checked(recipe, catalog.ingredients(), rates)
            .with_context(|| format!("cannot cost {recipe_id}"))?
    } else {
        compute_cost(recipe, catalog.ingredients(), rates)
    };

    if json {
        let report = CostReport {
            recipe_id: &recipe.id,
            name: &recipe.name,
            yield_units: recipe.yield_units,
            breakdown,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = format!("{} ({}) v{}\n", recipe.name, recipe.id, recipe.version);
    out.push_str(&format!("  Material:  {}\n", bakery_views::format::money(breakdown.material_cost)));
    out.push_str(&format!("  Labor:     {}\n", bakery_views::format::money(breakdown.labor_cost)));
    out.push_str(&format!("  Overhead:  {}\n", bakery_views::format::money(breakdown.overhead_cost)));
    out.push_str(&format!("  Total:     {}\n", bakery_views::format::money(breakdown.total_cost)));
    out.push_str(&format!("  Yield:     {}\n", recipe.yield_units));
    out.push_str(&format!("  Unit cost: {}\n", bakery_views::format::money(breakdown.unit_cost)));
    Ok(out)
}

/// Ask the advisor about one recipe
///
/// # Errors
/// - unknown recipe
/// - the fixed failure message when the advisor fails (cause is logged)
pub async fn advise(
    catalog: &dyn CatalogRepository,
    advisor: &dyn Advisor,
    recipe_id: &RecipeId,
) -> Result<String> {
    let recipe = catalog.require_recipe(recipe_id)?;
    let session = AdvisorySession::new();
    match session.request(advisor, recipe, catalog.ingredients()).await? {
        AdvisoryState::Ready { advice, .. } => {
            let mut out = format!("AI Chef Assistant ({})\n", advisor.name());
            out.push_str(&format!("Recipe: {}\n", recipe.name));
            out.push_str(&format!("Analysis: {}\n", advice.analysis));
            out.push_str(&format!("Suggestion: {}\n", advice.suggestion));
            out.push_str(&format!("Potential Savings: {}\n", advice.potential_savings));
            Ok(out)
        }
        AdvisoryState::Failed { message, .. } => bail!(message),
        other => bail!("advisory request ended in unexpected state {other:?}"),
    }
}

/// Demand forecast over the catalog's output history
///
/// # Errors
/// Any advisor failure
pub async fn forecast(catalog: &dyn CatalogRepository, advisor: &dyn Advisor) -> Result<String> {
    let forecast = advisor
        .forecast_demand(catalog.weekly_output())
        .await
        .context("demand forecast failed")?;
    Ok(format_forecast(&forecast))
}

fn format_forecast(forecast: &DemandForecast) -> String {
    let mut out = format!("Demand forecast (trend {})\n", forecast.trend);
    for day in &forecast.forecast {
        out.push_str(&format!("  {:<4} {:>5}  {}\n", day.day, day.predicted_qty, day.reasoning));
    }
    out.push_str(&format!("  Total: {}\n", forecast.total_predicted()));
    out
}

/// Integrity report and whether the catalog is clean
#[must_use]
pub fn check(catalog: &dyn CatalogRepository) -> (String, bool) {
    let report = check_integrity(catalog);
    if report.is_clean() {
        return ("Catalog OK: no integrity issues\n".to_string(), true);
    }
    let mut out = format!("{} integrity issue(s):\n", report.issues.len());
    for issue in &report.issues {
        out.push_str(&format!("  - {issue}\n"));
    }
    (out, false)
}
