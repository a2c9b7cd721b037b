//! Dashboard page

use super::row;
use crate::config::ViewConfig;
use crate::format::thousands;
use bakery_catalog::CatalogRepository;

/// One KPI card
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    /// Card title
    pub title: &'static str,
    /// Headline value
    pub value: String,
    /// Change or call to action
    pub subtext: &'static str,
    /// Whether the change is favorable
    pub favorable: bool,
}

/// Weekly material and labor spend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostTrendPoint {
    /// Week label
    pub week: &'static str,
    /// Material spend
    pub material: u32,
    /// Labor spend
    pub labor: u32,
}

/// Monthly cost trend shown on the dashboard
pub const COST_TREND: [CostTrendPoint; 4] = [
    CostTrendPoint { week: "W1", material: 2400, labor: 1200 },
    CostTrendPoint { week: "W2", material: 2200, labor: 1300 },
    CostTrendPoint { week: "W3", material: 2600, labor: 1100 },
    CostTrendPoint { week: "W4", material: 2300, labor: 1250 },
];

const TOTAL_BAKED: u64 = 2450;

/// KPI cards; low stock is counted from the catalog
#[must_use]
pub fn kpis(catalog: &dyn CatalogRepository, config: &ViewConfig) -> Vec<Kpi> {
    let low_stock = catalog
        .ingredients()
        .iter()
        .filter(|i| config.inventory.is_low_stock(i.current_stock))
        .count();
    vec![
        Kpi {
            title: "Total Baked",
            value: thousands(TOTAL_BAKED),
            subtext: "+12.5%",
            favorable: true,
        },
        Kpi {
            title: "Unit Cost",
            value: "$1.12".to_string(),
            subtext: "-0.4%",
            favorable: true,
        },
        Kpi {
            title: "Efficiency",
            value: "94.2%".to_string(),
            subtext: "+2.1%",
            favorable: true,
        },
        Kpi {
            title: "Low Stock",
            value: format!("{low_stock} Items"),
            subtext: "Restock Soon!",
            favorable: false,
        },
    ]
}

/// Render the dashboard
#[must_use]
pub fn render_dashboard(catalog: &dyn CatalogRepository, config: &ViewConfig) -> String {
    let mut out = String::new();
    out.push_str("Hello, Aisha!\n");
    out.push_str("Here's what's baking in your kitchen today.\n\n");

    for kpi in kpis(catalog, config) {
        let marker = if kpi.favorable { "+" } else { "!" };
        out.push_str(&format!(
            "[{marker}] {:<12} {:>9}  {} vs last month\n",
            kpi.title.to_uppercase(),
            kpi.value,
            kpi.subtext
        ));
    }

    out.push_str("\nBaking Output (This Week)\n");
    out.push_str(&row(&[("Day", 6), ("Planned", 9), ("Actual", 8)]));
    for day in catalog.weekly_output() {
        out.push_str(&row(&[
            (day.day.as_str(), 6),
            (day.planned.to_string().as_str(), 9),
            (day.actual.to_string().as_str(), 8),
        ]));
    }

    out.push_str("\nCost Breakdown (October)\n");
    out.push_str(&row(&[("Week", 6), ("Material", 10), ("Labor", 8)]));
    for point in COST_TREND {
        out.push_str(&row(&[
            (point.week, 6),
            (point.material.to_string().as_str(), 10),
            (point.labor.to_string().as_str(), 8),
        ]));
    }

    out.push_str("\nAI Prediction Ready!\n");
    out.push_str(
        "Our magic crystal ball predicts a 15% surge in croissant demand this weekend \
         due to sunny weather!\n",
    );
    out.push_str("[ See Full Forecast ]\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_catalog::StaticCatalog;
    use bakery_test_utils::demo_today;

    #[test]
    fn low_stock_counts_sample_catalog() {
        let cards = kpis(&StaticCatalog::sample(), &ViewConfig::new(demo_today()));
        assert_eq!(cards[0].value, "2,450");
        assert_eq!(cards[3].value, "2 Items");
        assert!(!cards[3].favorable);
    }

    #[test]
    fn renders_output_and_trend() {
        let text = render_dashboard(&StaticCatalog::sample(), &ViewConfig::new(demo_today()));
        assert!(text.contains("Mon   400      380\n"));
        assert!(text.contains("Fri   500      490\n"));
        assert!(text.contains("W3    2600      1100\n"));
        assert!(text.contains("AI Prediction Ready!"));
    }
}
