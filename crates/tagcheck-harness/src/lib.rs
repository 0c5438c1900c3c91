//! Fixture-driven testing of pattern-matching rule files
//!
//! The harness composes four linear phases:
//! - Discovery of rule files below a root directory
//! - Compilation through a [`RuleEngine`](tagcheck_domain::ports::RuleEngine),
//!   declaring every external variable with its default
//! - Execution of the sibling JSON fixture, case by case
//! - Reporting of per-file outcomes and the run total
//!
//! ```ignore
//! use std::sync::Arc;
//! use tagcheck_harness::{Reporter, RuleTester};
//!
//! let tester = RuleTester::new(Arc::new(engine), &config.harness, schema)?;
//! let results = tester.run(None)?;
//! let summary = Reporter::new(true, false).write_results(&mut std::io::stdout(), &results)?;
//! std::process::exit(if summary.passed() { 0 } else { 1 });
//! ```

pub mod discovery;
pub mod fixtures;
pub mod reporter;
pub mod runner;

pub use discovery::RuleDiscovery;
pub use fixtures::FixtureLoader;
pub use reporter::Reporter;
pub use runner::RuleTester;
