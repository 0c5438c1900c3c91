//! Configuration Module
//!
//! Layered configuration for tagcheck: built-in defaults, an optional
//! `tagcheck.toml`, then `TAGCHECK_`-prefixed environment variables.
//! Command-line flags are applied on top by the binary.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, OutputConfig};
