//! Bakery Views - console pages and navigation state
//!
//! Renders the dashboard, production, inventory, blueprint and settings
//! pages as text. Navigation is total: unknown page IDs land on the
//! dashboard.
//!
//! # Example
//!
//! ```rust
//! use bakery_catalog::StaticCatalog;
//! use bakery_views::{render, UiState, ViewConfig};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2023, 10, 29).unwrap();
//! let mut state = UiState::new();
//! state.navigate_to("production");
//! let text = render(&StaticCatalog::sample(), &ViewConfig::new(today), &state);
//! assert!(text.contains("Artisan Croissant"));
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod format;
pub mod page;
pub mod render;
pub mod state;

// Re-exports for convenience
pub use config::{InventoryThresholds, ViewConfig};
pub use page::{Page, ProductionTab};
pub use render::{render, render_layout, render_page};
pub use state::UiState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
