//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the harness.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML/env configuration |
//! | [`constants`] | Centralized infrastructure constants |
//! | [`error_ext`] | Context helpers converting foreign errors |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Engines
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | yara-x implementation of the rule engine port |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use adapters::YaraEngine;
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use logging::init_logging;
