//! Navigation targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// KPI overview
    #[default]
    Dashboard,
    /// Recipes, costing and schedule
    Production,
    /// Stock levels and lots
    Inventory,
    /// Architecture overview
    Blueprint,
    /// Placeholder
    Settings,
}

impl Page {
    /// Pages in navigation order
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Production,
        Page::Inventory,
        Page::Blueprint,
        Page::Settings,
    ];

    /// Navigation ID
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Production => "production",
            Page::Inventory => "inventory",
            Page::Blueprint => "blueprint",
            Page::Settings => "settings",
        }
    }

    /// Sidebar label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Production => "Production",
            Page::Inventory => "Inventory",
            Page::Blueprint => "System Blueprint",
            Page::Settings => "Settings",
        }
    }

    /// Page for an exact navigation ID; anything else selects the dashboard
    #[must_use]
    pub fn select(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or_else(|| {
                tracing::debug!(id, "unknown page, falling back to dashboard");
                Page::Dashboard
            })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Production page tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionTab {
    /// Recipes with BoM and costs
    #[default]
    Recipes,
    /// Orders by status
    Schedule,
}

impl ProductionTab {
    /// Tab ID
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            ProductionTab::Recipes => "recipes",
            ProductionTab::Schedule => "schedule",
        }
    }

    /// Tab label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ProductionTab::Recipes => "Recipes & BoM",
            ProductionTab::Schedule => "Schedule",
        }
    }

    /// Tab for an ID, if known
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "recipes" => Some(ProductionTab::Recipes),
            "schedule" => Some(ProductionTab::Schedule),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_known_ids() {
        for page in Page::ALL {
            assert_eq!(Page::select(page.id()), page);
        }
    }

    #[test]
    fn select_needs_exact_id() {
        assert_eq!(Page::select(" inventory "), Page::Dashboard);
        assert_eq!(Page::select("Inventory"), Page::Dashboard);
    }

    #[test]
    fn select_unknown_falls_back_to_dashboard() {
        assert_eq!(Page::select("reports"), Page::Dashboard);
        assert_eq!(Page::select(""), Page::Dashboard);
    }

    #[test]
    fn labels() {
        assert_eq!(Page::Blueprint.label(), "System Blueprint");
        assert_eq!(ProductionTab::Recipes.label(), "Recipes & BoM");
    }

    #[test]
    fn tab_parse() {
        assert_eq!(ProductionTab::parse("schedule"), Some(ProductionTab::Schedule));
        assert_eq!(ProductionTab::parse("kanban"), None);
    }
}
