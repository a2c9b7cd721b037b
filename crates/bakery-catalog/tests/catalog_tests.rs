use bakery_catalog::{
    check_integrity, CatalogRepository, IngredientId, OrderId, OrderStatus, StaticCatalog,
};
use pretty_assertions::assert_eq;

#[test]
fn every_sample_order_resolves_its_recipe() {
    let catalog = StaticCatalog::sample();
    for order in catalog.orders() {
        assert!(
            catalog.recipe(&order.recipe_id).is_some(),
            "order {} points at unknown recipe {}",
            order.id,
            order.recipe_id
        );
    }
}

#[test]
fn sample_orders_cover_schedule_columns() {
    let catalog = StaticCatalog::sample();
    let in_progress = catalog
        .require_order(&OrderId::new("WO-2023-881"))
        .unwrap();
    assert_eq!(in_progress.status, OrderStatus::InProgress);
    assert_eq!(in_progress.assigned_to.as_deref(), Some("Shift A"));

    let statuses: Vec<_> = catalog.orders().iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::InProgress,
            OrderStatus::Planned,
            OrderStatus::Completed
        ]
    );
}

#[test]
fn ingredient_json_shape_matches_catalog_export() {
    let catalog = StaticCatalog::sample();
    let flour = catalog.require_ingredient(&IngredientId::new("ING-001")).unwrap();
    let json = serde_json::to_value(flour).unwrap();
    assert_eq!(json["sku"], "RM-FL-01");
    assert_eq!(json["unit"], "KG");
    assert_eq!(json["currentStock"], 450.0);
    assert_eq!(json["expiryAlertDays"], 30);
}

#[test]
fn integrity_report_serializes_empty_for_sample() {
    let report = check_integrity(&StaticCatalog::sample());
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(json, r#"{"issues":[]}"#);
}
