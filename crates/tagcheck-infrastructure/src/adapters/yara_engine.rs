//! yara-x Rule Engine Adapter
//!
//! Implements the domain engine ports on top of the `yara-x` crate. Every
//! external variable is declared as a global at compile time with its
//! default, and reassigned on a fresh scanner for each match so no value
//! leaks from one test case into the next.

use crate::constants::YARA_ENGINE_NAME;
use std::collections::BTreeSet;
use std::path::Path;
use tagcheck_domain::error::{Error, Result};
use tagcheck_domain::ports::{CompiledRules, RuleEngine};
use tagcheck_domain::value_objects::{ExternalValue, ExternalValues, ExternalVariableSet};
use tracing::debug;
use yara_x::{Compiler, Rules, Scanner, SourceCode};

/// Rule engine backed by yara-x
#[derive(Debug, Default, Clone, Copy)]
pub struct YaraEngine;

impl YaraEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }

    /// Compile rule source held in memory
    ///
    /// `origin` only labels diagnostics.
    pub fn compile_source(
        &self,
        origin: &Path,
        source: &str,
        schema: &ExternalVariableSet,
    ) -> Result<YaraRules> {
        let mut compiler = Compiler::new();

        for (name, value) in schema.iter() {
            let declared = match value {
                ExternalValue::Integer(v) => compiler.define_global(name, *v),
                ExternalValue::Text(v) => compiler.define_global(name, v.as_str()),
            };
            declared.map_err(|e| Error::variable(name, e.to_string()))?;
        }

        let origin_label = origin.display().to_string();
        compiler
            .add_source(SourceCode::from(source).with_origin(origin_label.as_str()))
            .map_err(|e| Error::compile(origin, e.to_string()))?;

        debug!(rules = %origin.display(), "Compiled rule file");

        Ok(YaraRules {
            rules: compiler.build(),
        })
    }
}

impl RuleEngine for YaraEngine {
    fn compile(
        &self,
        rules_path: &Path,
        schema: &ExternalVariableSet,
    ) -> Result<Box<dyn CompiledRules>> {
        let source = std::fs::read_to_string(rules_path)
            .map_err(|e| Error::compile(rules_path, format!("cannot read rule file: {e}")))?;

        Ok(Box::new(self.compile_source(rules_path, &source, schema)?))
    }

    fn engine_name(&self) -> &str {
        YARA_ENGINE_NAME
    }
}

/// Compiled yara-x rule set
pub struct YaraRules {
    rules: Rules,
}

impl CompiledRules for YaraRules {
    fn fired_rules(&self, data: &[u8], externals: &ExternalValues) -> Result<BTreeSet<String>> {
        let mut scanner = Scanner::new(&self.rules);

        for (name, value) in externals.iter() {
            let assigned = match value {
                ExternalValue::Integer(v) => scanner.set_global(name, *v),
                ExternalValue::Text(v) => scanner.set_global(name, v.as_str()),
            };
            assigned.map_err(|e| Error::variable(name, e.to_string()))?;
        }

        let results = scanner
            .scan(data)
            .map_err(|e| Error::scan(e.to_string()))?;

        Ok(results
            .matching_rules()
            .map(|rule| rule.identifier().to_string())
            .collect())
    }
}
