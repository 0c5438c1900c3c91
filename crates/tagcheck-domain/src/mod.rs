//! # tagcheck Domain Layer
//!
//! Core types for testing pattern-matching rule files against JSON fixtures.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Tagging dictionary and on-disk conventions |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Rule engine boundary traits |
//! | [`value_objects`] | Externals, fixtures, results and settings |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{CompiledRules, RuleEngine};
pub use value_objects::*;
