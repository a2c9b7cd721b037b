//! Catalog integrity check
//!
//! Reports references that do not resolve and recipes whose cost cannot be
//! divided over their yield. The check never rejects a catalog; callers
//! decide whether issues are fatal.

use crate::repository::CatalogRepository;
use crate::types::{IngredientId, LotId, OrderId, RecipeId};
use serde::Serialize;
use std::fmt;

/// A single data-integrity problem
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// BoM line references an unknown ingredient
    UnresolvedBomIngredient {
        /// Recipe holding the line
        recipe: RecipeId,
        /// Missing ingredient
        ingredient: IngredientId,
    },
    /// Production order references an unknown recipe
    UnresolvedOrderRecipe {
        /// Order holding the reference
        order: OrderId,
        /// Missing recipe
        recipe: RecipeId,
    },
    /// Lot references an unknown ingredient
    UnresolvedLotIngredient {
        /// Lot holding the reference
        lot: LotId,
        /// Missing ingredient
        ingredient: IngredientId,
    },
    /// Recipe yields nothing, so unit cost is undefined
    ZeroYield {
        /// Offending recipe
        recipe: RecipeId,
    },
    /// BoM line with a negative or non-finite waste fraction
    InvalidWaste {
        /// Recipe holding the line
        recipe: RecipeId,
        /// Ingredient of the line
        ingredient: IngredientId,
        /// Offending value
        waste_percentage: f64,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedBomIngredient { recipe, ingredient } => {
                write!(f, "recipe {recipe}: BoM ingredient {ingredient} not in catalog")
            }
            Self::UnresolvedOrderRecipe { order, recipe } => {
                write!(f, "order {order}: recipe {recipe} not in catalog")
            }
            Self::UnresolvedLotIngredient { lot, ingredient } => {
                write!(f, "lot {lot}: ingredient {ingredient} not in catalog")
            }
            Self::ZeroYield { recipe } => write!(f, "recipe {recipe}: yield is zero"),
            Self::InvalidWaste {
                recipe,
                ingredient,
                waste_percentage,
            } => write!(
                f,
                "recipe {recipe}: waste {waste_percentage} for {ingredient} is not a non-negative fraction"
            ),
        }
    }
}

/// Result of an integrity check
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    /// Issues found, in catalog order
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    /// True when no issue was found
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Emit one warning per issue
    pub fn log(&self) {
        for issue in &self.issues {
            tracing::warn!(%issue, "catalog integrity issue");
        }
    }
}

/// Check every cross-reference in the catalog
#[must_use]
pub fn check_integrity<C: CatalogRepository + ?Sized>(catalog: &C) -> IntegrityReport {
    let mut issues = Vec::new();

    for recipe in catalog.recipes() {
        if recipe.yield_units == 0 {
            issues.push(IntegrityIssue::ZeroYield {
                recipe: recipe.id.clone(),
            });
        }
        for line in &recipe.items {
            if catalog.ingredient(&line.ingredient_id).is_none() {
                issues.push(IntegrityIssue::UnresolvedBomIngredient {
                    recipe: recipe.id.clone(),
                    ingredient: line.ingredient_id.clone(),
                });
            }
            if !line.waste_percentage.is_finite() || line.waste_percentage < 0.0 {
                issues.push(IntegrityIssue::InvalidWaste {
                    recipe: recipe.id.clone(),
                    ingredient: line.ingredient_id.clone(),
                    waste_percentage: line.waste_percentage,
                });
            }
        }
    }

    for order in catalog.orders() {
        if catalog.recipe(&order.recipe_id).is_none() {
            issues.push(IntegrityIssue::UnresolvedOrderRecipe {
                order: order.id.clone(),
                recipe: order.recipe_id.clone(),
            });
        }
    }

    for lot in catalog.lots() {
        if catalog.ingredient(&lot.ingredient_id).is_none() {
            issues.push(IntegrityIssue::UnresolvedLotIngredient {
                lot: lot.id.clone(),
                ingredient: lot.ingredient_id.clone(),
            });
        }
    }

    IntegrityReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StaticCatalog;
    use crate::types::{BomLine, Ingredient, Recipe, UnitOfMeasure};

    #[test]
    fn sample_catalog_is_clean() {
        let report = check_integrity(&StaticCatalog::sample());
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn reports_unresolved_ingredient_and_zero_yield() {
        let catalog = StaticCatalog::builder()
            .ingredient(Ingredient::new("ING-001", "Flour", "RM-FL-01", UnitOfMeasure::Kg))
            .recipe(
                Recipe::new("RCP-BAD", "Ghost Bun", "0.1")
                    .with_yield(0)
                    .with_item(BomLine::new("ING-001", 1.0, 0.0))
                    .with_item(BomLine::new("ING-999", 1.0, -0.5)),
            )
            .build();

        let report = check_integrity(&catalog);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(
            report.issues[0],
            IntegrityIssue::ZeroYield {
                recipe: RecipeId::new("RCP-BAD")
            }
        );
        assert!(matches!(
            &report.issues[1],
            IntegrityIssue::UnresolvedBomIngredient { ingredient, .. } if ingredient == "ING-999"
        ));
        assert!(matches!(&report.issues[2], IntegrityIssue::InvalidWaste { .. }));
    }

    #[test]
    fn issue_display_names_both_ids() {
        let issue = IntegrityIssue::UnresolvedBomIngredient {
            recipe: RecipeId::new("RCP-001"),
            ingredient: IngredientId::new("ING-999"),
        };
        let text = issue.to_string();
        assert!(text.contains("RCP-001"));
        assert!(text.contains("ING-999"));
    }
}
