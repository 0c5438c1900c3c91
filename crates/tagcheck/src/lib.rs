//! # tagcheck
//!
//! Fixture-driven testing for YARA rules that classify Assemblyline
//! submissions by their metadata.
//!
//! Every `*.rules` file below a root directory is compiled with the
//! Assemblyline external variables declared, then matched against an empty
//! buffer once per case in its sibling `tests/<name>.json` fixture.
//!
//! ## Example
//!
//! ```ignore
//! use tagcheck::{app, RunOptions};
//!
//! let options = RunOptions {
//!     rules_dir: Some("tagcheck".into()),
//!     ..RunOptions::default()
//! };
//! let config = app::load_config(&options)?;
//! let outcome = app::execute(&options, &config, &mut std::io::stdout().lock())?;
//! std::process::exit(outcome.exit_status().into());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Fixture, external variable and result types; the engine port
//! - `infrastructure` - Configuration, logging and the yara-x adapter
//! - `harness` - Discovery, fixture execution and reporting
//! - [`app`] - Wiring used by the `tagcheck` binary

pub mod app;

/// Domain layer - fixtures, externals, results and the engine port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tagcheck_domain::*;
}

/// Infrastructure layer - config, logging and engine adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tagcheck_infrastructure::*;
}

/// Harness layer - discovery, execution and reporting
///
/// Re-exports from the harness crate for convenience
pub mod harness {
    pub use tagcheck_harness::*;
}

pub use app::{Outcome, RunOptions};
pub use domain::{Error, Result};
