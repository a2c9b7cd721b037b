//! Inventory page

use crate::config::ViewConfig;
use crate::format::{money, quantity};
use bakery_catalog::CatalogRepository;

/// Render the inventory page
#[must_use]
pub fn render_inventory(catalog: &dyn CatalogRepository, config: &ViewConfig) -> String {
    let mut out = String::new();
    out.push_str("Pantry & Inventory\n");
    out.push_str("Keep track of your ingredients and expiry dates.\n\n");

    for item in catalog.ingredients() {
        out.push_str(&format!("{} ({})\n", item.name, item.sku));

        let low = if config.inventory.is_low_stock(item.current_stock) {
            "  [LOW]"
        } else {
            ""
        };
        out.push_str(&format!(
            "  Stock: {} {}{low}\n",
            quantity(item.current_stock),
            item.unit
        ));
        out.push_str(&format!(
            "  Valuation: {} / {}  Avg. Basis\n",
            money(item.standard_cost),
            item.unit
        ));

        let lots = catalog.lots_for(&item.id);
        if lots.is_empty() {
            out.push_str("  Lots: No active lots\n");
        } else {
            out.push_str("  Lots:\n");
            for lot in lots {
                let days = lot.days_to_expiry(config.today);
                let flag = if config.inventory.is_expiring(days) {
                    "  [EXPIRING]"
                } else {
                    ""
                };
                out.push_str(&format!("    {} {days}d left{flag}\n", lot.id));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InventoryThresholds;
    use bakery_catalog::StaticCatalog;
    use bakery_test_utils::demo_today;

    #[test]
    fn flags_low_stock_and_expiring_lots() {
        let text = render_inventory(&StaticCatalog::sample(), &ViewConfig::new(demo_today()));
        assert!(text.contains("Unsalted Butter (RM-DA-01)\n  Stock: 80 KG  [LOW]\n"));
        assert!(text.contains("Premium Bread Flour (RM-FL-01)\n  Stock: 450 KG\n"));
        assert!(text.contains("  Valuation: $1.20 / KG  Avg. Basis\n"));
        assert!(text.contains("    LOT-MK-001 2d left  [EXPIRING]\n"));
        assert!(text.contains("    LOT-BF-992 155d left\n"));
        assert!(text.contains("Cane Sugar (RM-SW-01)\n  Stock: 200 KG\n  Valuation: $0.90 / KG  Avg. Basis\n  Lots: No active lots\n"));
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = ViewConfig::new(demo_today()).with_inventory(InventoryThresholds {
            low_stock_threshold: 500.0,
            expiring_window_days: 200,
        });
        let text = render_inventory(&StaticCatalog::sample(), &config);
        assert!(text.contains("  Stock: 450 KG  [LOW]\n"));
        assert!(text.contains("    LOT-BF-992 155d left  [EXPIRING]\n"));
    }
}
