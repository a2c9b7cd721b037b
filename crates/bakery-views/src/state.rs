//! Transient UI state
//!
//! Every transition is total: no input leaves the state invalid.

use crate::page::{Page, ProductionTab};
use bakery_advisor::AdvisorySession;
use bakery_catalog::RecipeId;

/// Navigation and panel state of one console session
#[derive(Debug, Clone, Default)]
pub struct UiState {
    page: Page,
    sidebar_open: bool,
    production_tab: ProductionTab,
    expanded_recipe: Option<RecipeId>,
    advisory: AdvisorySession,
}

impl UiState {
    /// Create state on the dashboard with the sidebar closed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page
    #[inline]
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Whether the sidebar is open
    #[inline]
    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Current production tab
    #[inline]
    #[must_use]
    pub fn production_tab(&self) -> ProductionTab {
        self.production_tab
    }

    /// Expanded recipe, if any
    #[inline]
    #[must_use]
    pub fn expanded_recipe(&self) -> Option<&RecipeId> {
        self.expanded_recipe.as_ref()
    }

    /// Advisory session driving the AI panel
    #[inline]
    #[must_use]
    pub fn advisory(&self) -> &AdvisorySession {
        &self.advisory
    }

    /// Go to a page; closes the sidebar
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
        self.sidebar_open = false;
    }

    /// Go to the page with this ID; unknown IDs go to the dashboard
    pub fn navigate_to(&mut self, id: &str) -> Page {
        let page = Page::select(id);
        self.navigate(page);
        page
    }

    /// Open or close the sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Switch production tab
    pub fn set_tab(&mut self, tab: ProductionTab) {
        self.production_tab = tab;
    }

    /// Expand a recipe, or collapse it when already expanded
    pub fn toggle_recipe(&mut self, id: &RecipeId) {
        if self.expanded_recipe.as_ref() == Some(id) {
            self.expanded_recipe = None;
        } else {
            self.expanded_recipe = Some(id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        let state = UiState::new();
        assert_eq!(state.page(), Page::Dashboard);
        assert!(!state.sidebar_open());
        assert_eq!(state.production_tab(), ProductionTab::Recipes);
        assert!(state.expanded_recipe().is_none());
    }

    #[test]
    fn navigate_closes_sidebar() {
        let mut state = UiState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_open());
        state.navigate(Page::Inventory);
        assert_eq!(state.page(), Page::Inventory);
        assert!(!state.sidebar_open());
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut state = UiState::new();
        assert_eq!(state.navigate_to("production"), Page::Production);
        assert_eq!(state.navigate_to("production"), Page::Production);
        assert_eq!(state.page(), Page::Production);
        assert_eq!(state.navigate_to("nowhere"), Page::Dashboard);
    }

    #[test]
    fn toggle_recipe_expands_and_collapses() {
        let mut state = UiState::new();
        let croissant = RecipeId::new("RCP-001");
        let chocolat = RecipeId::new("RCP-002");

        state.toggle_recipe(&croissant);
        assert_eq!(state.expanded_recipe(), Some(&croissant));
        state.toggle_recipe(&chocolat);
        assert_eq!(state.expanded_recipe(), Some(&chocolat));
        state.toggle_recipe(&chocolat);
        assert!(state.expanded_recipe().is_none());
    }
}
