//! Page renderers
//!
//! Pure functions of catalog, configuration and UI state to text. The
//! layout wraps whichever page body is current.

mod blueprint;
mod dashboard;
mod inventory;
mod production;

pub use blueprint::{render_blueprint, render_settings};
pub use dashboard::{kpis, render_dashboard, CostTrendPoint, Kpi, COST_TREND};
pub use inventory::render_inventory;
pub use production::{render_ai_panel, render_recipes, render_schedule};

use crate::config::ViewConfig;
use crate::page::{Page, ProductionTab};
use crate::state::UiState;
use bakery_catalog::CatalogRepository;

/// Brand name in the header
pub const BRAND: &str = "AISHA";
/// Product line under the brand
pub const BRAND_TAGLINE: &str = "Bakery ERP";
/// Signed-in user shown in the sidebar
pub const USER_NAME: &str = "Aisha M.";
/// Role of the signed-in user
pub const USER_ROLE: &str = "Owner & Chef";

const RULE: &str = "------------------------------------------------------------";

/// Render the current page inside the layout
#[must_use]
pub fn render(catalog: &dyn CatalogRepository, config: &ViewConfig, state: &UiState) -> String {
    let body = render_page(catalog, config, state);
    render_layout(config, state, &body)
}

/// Render the current page body
#[must_use]
pub fn render_page(catalog: &dyn CatalogRepository, config: &ViewConfig, state: &UiState) -> String {
    match state.page() {
        Page::Dashboard => render_dashboard(catalog, config),
        Page::Production => match state.production_tab() {
            ProductionTab::Recipes => render_recipes(catalog, config, state),
            ProductionTab::Schedule => render_schedule(catalog),
        },
        Page::Inventory => render_inventory(catalog, config),
        Page::Blueprint => render_blueprint(),
        Page::Settings => render_settings(),
    }
}

/// Wrap a page body with header, sidebar and user card
#[must_use]
pub fn render_layout(config: &ViewConfig, state: &UiState, body: &str) -> String {
    let mut out = String::new();

    if config.wide_layout || state.sidebar_open() {
        out.push_str(&format!("{BRAND} | {BRAND_TAGLINE}\n"));
        out.push_str(RULE);
        out.push('\n');
        for page in Page::ALL {
            if page == state.page() {
                out.push_str(&format!(" > {} <3\n", page.label()));
            } else {
                out.push_str(&format!("   {}\n", page.label()));
            }
        }
        out.push('\n');
        out.push_str(&format!(" [AM] {USER_NAME} - {USER_ROLE}\n"));
    } else {
        out.push_str(&format!("{BRAND} BAKERY  [=] {}\n", state.page().label()));
    }

    out.push_str(RULE);
    out.push('\n');
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Left-aligned table row with fixed column widths
pub(crate) fn row(cells: &[(&str, usize)]) -> String {
    let mut line = String::new();
    for (text, width) in cells {
        line.push_str(&format!("{text:<width$}", width = *width));
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_catalog::StaticCatalog;
    use bakery_test_utils::demo_today;

    #[test]
    fn wide_layout_marks_active_page() {
        let mut state = UiState::new();
        state.navigate(Page::Inventory);
        let text = render(&StaticCatalog::sample(), &ViewConfig::new(demo_today()), &state);

        assert!(text.starts_with("AISHA | Bakery ERP\n"));
        assert!(text.contains(" > Inventory <3\n"));
        assert!(text.contains("   Dashboard\n"));
        assert!(text.contains("   System Blueprint\n"));
        assert!(text.contains("Aisha M. - Owner & Chef"));
        assert!(text.contains("Pantry & Inventory"));
    }

    #[test]
    fn narrow_layout_hides_sidebar_until_opened() {
        let config = ViewConfig::new(demo_today()).narrow();
        let mut state = UiState::new();

        let closed = render_layout(&config, &state, "body");
        assert!(closed.starts_with("AISHA BAKERY  [=] Dashboard\n"));
        assert!(!closed.contains("Owner & Chef"));

        state.toggle_sidebar();
        let open = render_layout(&config, &state, "body");
        assert!(open.contains(" > Dashboard <3\n"));
        assert!(open.ends_with("body\n"));
    }

    #[test]
    fn row_pads_and_trims() {
        assert_eq!(row(&[("a", 4), ("bb", 4), ("c", 4)]), "a   bb  c\n");
    }
}
