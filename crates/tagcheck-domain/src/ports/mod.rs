//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the infrastructure layer.

/// Rule compilation and matching ports
pub mod engine;

pub use engine::{CompiledRules, RuleEngine};
