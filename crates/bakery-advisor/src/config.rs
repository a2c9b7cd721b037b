//! Advisor configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the service credential
pub const API_KEY_ENV: &str = "API_KEY";

/// Default generative model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default service base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Advisor configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Service credential; `None` selects the canned advisor. Never read
    /// from or written to a config file.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Base URL of the generative-text service
    pub base_url: String,
    /// Delay before the canned advisor answers, in milliseconds
    pub simulated_delay_ms: u64,
    /// Per-request timeout for the live advisor, in seconds
    pub request_timeout_secs: u64,
}

impl AdvisorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With credential
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With canned-advisor delay
    #[inline]
    #[must_use]
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Overlay the credential from `API_KEY` when it is set and non-empty
    #[must_use]
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        self
    }

    /// Credential, ignoring blank values
    #[inline]
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Canned-advisor delay
    #[inline]
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Live-advisor request timeout
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            simulated_delay_ms: 2_000,
            request_timeout_secs: 30,
        }
    }
}

impl fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.credential().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("simulated_delay_ms", &self.simulated_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
