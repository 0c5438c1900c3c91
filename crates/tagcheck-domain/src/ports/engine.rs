//! Rule Engine Port
//!
//! Boundary to the external matching engine. The harness never looks inside
//! a rule file; it only asks an engine to compile one against the external
//! variable schema and to report which rules fired for a value map.
//!
//! ## Usage
//!
//! - The traits are defined here (tagcheck-domain)
//! - The yara-x implementation lives in tagcheck-infrastructure
//! - The harness depends on the abstraction only

use crate::error::Result;
use crate::value_objects::{ExternalValues, ExternalVariableSet};
use std::collections::BTreeSet;
use std::path::Path;

/// Compiles rule files
///
/// # Example
///
/// ```ignore
/// use tagcheck_domain::ports::RuleEngine;
///
/// fn compile_all(engine: &dyn RuleEngine, schema: &ExternalVariableSet, paths: &[PathBuf]) {
///     for path in paths {
///         let rules = engine.compile(path, schema)?;
///         let fired = rules.fired_rules(b"", &schema.defaults())?;
///     }
/// }
/// ```
pub trait RuleEngine: Send + Sync {
    /// Compile the rule file at `rules_path`, declaring every variable in
    /// `schema` with its default value
    fn compile(
        &self,
        rules_path: &Path,
        schema: &ExternalVariableSet,
    ) -> Result<Box<dyn CompiledRules>>;

    /// Get the name/identifier of this engine implementation
    fn engine_name(&self) -> &str;
}

/// A compiled rule set, ready to be matched repeatedly
pub trait CompiledRules: Send + Sync {
    /// Names of the rules that match `data` under `externals`
    fn fired_rules(&self, data: &[u8], externals: &ExternalValues) -> Result<BTreeSet<String>>;
}
