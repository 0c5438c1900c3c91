//! Domain Value Objects
//!
//! Immutable value objects shared by the harness layers.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ExternalVariableSet`] | Declared external variables and their defaults |
//! | [`ExternalValues`] | Complete value map for one matching call |
//! | [`TestFile`] | Fixture entries read from one JSON document |
//! | [`TestCase`] | One validated fixture entry |
//! | [`RuleTestResult`] | Per rule file pass/fail/error outcome |
//! | [`RunSummary`] | File counts for the closing summary |

/// Configuration value objects
pub mod config;
/// External variable value objects
pub mod externals;
/// Fixture value objects
pub mod fixture;
/// Result value objects
pub mod results;

pub use config::{ExternalsConfig, HarnessConfig};
pub use externals::{ExternalValue, ExternalValues, ExternalVariableSet};
pub use fixture::{FixtureCase, FixtureValue, TestCase, TestFile};
pub use results::{AssertionOutcome, RuleTestResult, RunSummary};
