//! Engine Adapters
//!
//! Implementations of the domain engine ports.

pub mod yara_engine;

pub use yara_engine::{YaraEngine, YaraRules};
