//! Domain value types for the bakery catalog
//!
//! Defines:
//! - Identifier newtypes for every catalog entity
//! - Ingredients, lots, recipes and their bill of materials
//! - Production orders and their status
//!
//! All types are immutable sample data; nothing here is mutated after
//! the catalog is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create identifier from any string-like value
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Ingredient identifier (e.g. `ING-001`)
    IngredientId
);
string_id!(
    /// Recipe identifier (e.g. `RCP-001`)
    RecipeId
);
string_id!(
    /// Lot identifier (e.g. `LOT-BF-992`)
    LotId
);
string_id!(
    /// Production (work) order identifier (e.g. `WO-2023-881`)
    OrderId
);

/// Unit of measure for stock and recipe quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasure {
    /// Kilograms
    #[serde(rename = "KG")]
    Kg,
    /// Liters
    #[serde(rename = "L")]
    Liter,
    /// Countable units
    #[serde(rename = "UNIT")]
    Unit,
    /// Grams
    #[serde(rename = "G")]
    Gram,
}

impl UnitOfMeasure {
    /// Display code
    #[inline]
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            UnitOfMeasure::Kg => "KG",
            UnitOfMeasure::Liter => "L",
            UnitOfMeasure::Unit => "UNIT",
            UnitOfMeasure::Gram => "G",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind of inventory transaction.
///
/// Only referenced by labels; no ledger is computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Goods received from a supplier
    Purchase,
    /// Consumed by a production order
    ProductionUse,
    /// Manual stock correction
    Adjustment,
    /// Sold to a customer
    Sale,
}

/// Raw material kept in the pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient ID
    pub id: IngredientId,
    /// Display name
    pub name: String,
    /// Stock keeping unit
    pub sku: String,
    /// Unit of measure
    pub unit: UnitOfMeasure,
    /// Quantity on hand
    pub current_stock: f64,
    /// Standard cost per unit
    pub standard_cost: f64,
    /// Most recent purchase price per unit
    pub last_purchase_price: f64,
    /// Days before expiry to alert
    pub expiry_alert_days: u32,
}

impl Ingredient {
    /// Create ingredient with zero stock and prices
    #[must_use]
    pub fn new(
        id: impl Into<IngredientId>,
        name: impl Into<String>,
        sku: impl Into<String>,
        unit: UnitOfMeasure,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            unit,
            current_stock: 0.0,
            standard_cost: 0.0,
            last_purchase_price: 0.0,
            expiry_alert_days: 0,
        }
    }

    /// With stock on hand
    #[inline]
    #[must_use]
    pub fn with_stock(mut self, current_stock: f64) -> Self {
        self.current_stock = current_stock;
        self
    }

    /// With standard and last purchase price
    #[inline]
    #[must_use]
    pub fn with_prices(mut self, standard_cost: f64, last_purchase_price: f64) -> Self {
        self.standard_cost = standard_cost;
        self.last_purchase_price = last_purchase_price;
        self
    }

    /// With expiry alert lead time
    #[inline]
    #[must_use]
    pub fn with_expiry_alert_days(mut self, days: u32) -> Self {
        self.expiry_alert_days = days;
        self
    }
}

/// A received batch of an ingredient.
///
/// Lots are never decremented or merged; they exist for traceability
/// display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// Lot ID
    pub id: LotId,
    /// Owning ingredient
    pub ingredient_id: IngredientId,
    /// Received quantity
    pub quantity: f64,
    /// Date received
    pub received_date: NaiveDate,
    /// Date of expiry
    pub expiry_date: NaiveDate,
    /// Actual cost per unit for this lot
    pub cost_basis: f64,
}

impl Lot {
    /// Whole days from `today` until expiry (negative once expired)
    #[inline]
    #[must_use]
    pub fn days_to_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}

/// One bill-of-materials line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    /// Ingredient consumed
    pub ingredient_id: IngredientId,
    /// Quantity per batch, in the ingredient's unit
    pub quantity: f64,
    /// Fraction lost in processing (0.02 = 2%)
    pub waste_percentage: f64,
}

impl BomLine {
    /// Create BoM line
    #[inline]
    #[must_use]
    pub fn new(ingredient_id: impl Into<IngredientId>, quantity: f64, waste_percentage: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
            waste_percentage,
        }
    }
}

/// Recipe with its bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe ID
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Version string
    pub version: String,
    /// Units produced per batch
    pub yield_units: u32,
    /// Labor hours per batch
    pub base_labor_hours: f64,
    /// Bill of materials, in display order
    pub items: Vec<BomLine>,
    /// Free-text instructions
    pub instructions: String,
    /// Whether the recipe is in use
    pub is_active: bool,
}

impl Recipe {
    /// Create active recipe with an empty BoM
    #[must_use]
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            yield_units: 1,
            base_labor_hours: 0.0,
            items: Vec::new(),
            instructions: String::new(),
            is_active: true,
        }
    }

    /// With batch yield
    #[inline]
    #[must_use]
    pub fn with_yield(mut self, yield_units: u32) -> Self {
        self.yield_units = yield_units;
        self
    }

    /// With labor hours
    #[inline]
    #[must_use]
    pub fn with_labor_hours(mut self, hours: f64) -> Self {
        self.base_labor_hours = hours;
        self
    }

    /// Append a BoM line
    #[inline]
    #[must_use]
    pub fn with_item(mut self, line: BomLine) -> Self {
        self.items.push(line);
        self
    }

    /// With instructions
    #[inline]
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Mark inactive
    #[inline]
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Production order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Scheduled, not started
    Planned,
    /// On the shop floor
    InProgress,
    /// Awaiting quality sign-off
    QualityCheck,
    /// Finished
    Completed,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Planned,
        OrderStatus::InProgress,
        OrderStatus::QualityCheck,
        OrderStatus::Completed,
    ];

    /// Wire code (`IN_PROGRESS`)
    #[inline]
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Planned => "PLANNED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::QualityCheck => "QUALITY_CHECK",
            OrderStatus::Completed => "COMPLETED",
        }
    }

    /// Human label (`IN PROGRESS`)
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Planned => "PLANNED",
            OrderStatus::InProgress => "IN PROGRESS",
            OrderStatus::QualityCheck => "QUALITY CHECK",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Work order to produce a quantity of one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrder {
    /// Order ID
    pub id: OrderId,
    /// Recipe to bake
    pub recipe_id: RecipeId,
    /// Current status
    pub status: OrderStatus,
    /// Units to produce
    pub quantity_to_produce: u32,
    /// Planned start
    pub start_date: NaiveDate,
    /// Due date
    pub due_date: NaiveDate,
    /// Shift or person responsible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Planned vs. actual output for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOutput {
    /// Day label (`Mon`)
    pub day: String,
    /// Units planned
    pub planned: u32,
    /// Units baked
    pub actual: u32,
}
