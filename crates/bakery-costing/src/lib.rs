//! Bakery Costing - recipe cost roll-up
//!
//! Maps a recipe, the ingredient catalog and flat hourly rates to a
//! material / labor / overhead / unit cost breakdown:
//! - `compute_cost` is the display path: unresolved ingredients cost zero
//!   and a zero yield yields a non-finite unit cost
//! - `compute_cost_checked` rejects both
//!
//! # Example
//!
//! ```rust
//! use bakery_catalog::sample;
//! use bakery_costing::{compute_cost, CostRates};
//!
//! let croissant = &sample::recipes()[0];
//! let cost = compute_cost(croissant, sample::ingredients(), &CostRates::default());
//! assert_eq!(format!("{:.2}", cost.unit_cost), "3.77");
//! ```

#![warn(unreachable_pub)]

pub mod calculator;
pub mod error;
pub mod rates;

// Re-exports for convenience
pub use calculator::{compute_cost, compute_cost_checked, line_costs, CostBreakdown, LineCost};
pub use error::CostingError;
pub use rates::CostRates;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
