//! Bakery Advisor - AI chef assistant
//!
//! Recipe cost-reduction advice and demand forecasts from a generative-text
//! service, with an offline canned fallback when no credential is set.
//!
//! - `Advisor` is the capability; `CannedAdvisor` and `GeminiAdvisor`
//!   implement it
//! - `AdvisorySession` gates the UI to one outstanding request
//!
//! # Example
//!
//! ```rust,no_run
//! use bakery_advisor::{advisor_from_config, AdvisorConfig, AdvisorySession};
//! use bakery_catalog::sample;
//!
//! # async fn run() -> Result<(), bakery_advisor::AdvisorError> {
//! let advisor = advisor_from_config(&AdvisorConfig::new().with_env())?;
//! let session = AdvisorySession::new();
//! let state = session
//!     .request(advisor.as_ref(), &sample::recipes()[0], sample::ingredients())
//!     .await?;
//! println!("{state:?}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod advisor;
pub mod canned;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use advisor::{advisor_from_config, Advisor};
pub use canned::{canned_advice, canned_forecast, CannedAdvisor};
pub use config::{AdvisorConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::AdvisorError;
pub use gemini::GeminiAdvisor;
pub use session::{AdvisorySession, AdvisoryState, FAILURE_MESSAGE};
pub use types::{Advice, DemandForecast, ForecastDay, Trend};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
