//! Bakery CLI - operations console
//!
//! Command definition, configuration loading, one-shot commands and the
//! interactive session behind the `bakery` binary.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod interactive;

// Re-exports for convenience
pub use config::{AppConfig, ConfigError, CONFIG_ENV};
pub use interactive::{Shell, ShellCommand};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
