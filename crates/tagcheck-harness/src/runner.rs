//! Fixture execution.
//!
//! Each rule file is compiled once, then every case in its fixture is
//! matched against an empty buffer with the case's external values. Errors
//! are caught at the narrowest scope: a compile or fixture problem marks
//! the file, a bad case marks only that case.

use crate::discovery::RuleDiscovery;
use crate::fixtures::FixtureLoader;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tagcheck_domain::ports::{CompiledRules, RuleEngine};
use tagcheck_domain::value_objects::{
    ExternalValue, ExternalVariableSet, FixtureCase, HarnessConfig, RuleTestResult, TestCase,
};
use tagcheck_domain::Result;
use tracing::{debug, info, warn};

/// Rules are tested against metadata only, never content
const EMPTY_CONTENT: &[u8] = b"";

/// Runs fixtures against discovered rule files
pub struct RuleTester {
    engine: Arc<dyn RuleEngine>,
    schema: ExternalVariableSet,
    fixtures: FixtureLoader,
    list_separator: String,
    rules_paths: Vec<PathBuf>,
}

impl RuleTester {
    /// Discover rule files under `config.rules_dir`
    pub fn new(
        engine: Arc<dyn RuleEngine>,
        config: &HarnessConfig,
        schema: ExternalVariableSet,
    ) -> Result<Self> {
        let rules_paths = RuleDiscovery::new(&config.rules_dir, &config.rule_pattern)?.discover();
        info!(
            engine = engine.engine_name(),
            rules_dir = %config.rules_dir.display(),
            files = rules_paths.len(),
            externals = schema.len(),
            "Rule tester ready"
        );

        Ok(Self {
            engine,
            schema,
            fixtures: FixtureLoader::from_config(config),
            list_separator: config.list_separator.clone(),
            rules_paths,
        })
    }

    /// Discovered rule files
    pub fn rules_paths(&self) -> &[PathBuf] {
        &self.rules_paths
    }

    /// Test every discovered file, or only the one `single_file` names
    ///
    /// Fails only when `single_file` matches no discovered file.
    pub fn run(&self, single_file: Option<&str>) -> Result<Vec<RuleTestResult>> {
        match single_file {
            None => Ok(self.rules_paths.iter().map(|p| self.test(p)).collect()),
            Some(name) => {
                let path = RuleDiscovery::resolve(&self.rules_paths, name)?;
                Ok(vec![self.test(&path)])
            }
        }
    }

    /// Compile one rule file and run its fixture
    pub fn test(&self, rules_path: &Path) -> RuleTestResult {
        let mut result = RuleTestResult::new(rules_path);
        info!(rules = %rules_path.display(), "Testing rule file");

        let rules = match self.engine.compile(rules_path, &self.schema) {
            Ok(rules) => rules,
            Err(e) => {
                warn!(rules = %rules_path.display(), error = %e, "Rule file failed to compile");
                result.record_error(e);
                return result;
            }
        };

        let fixture_path = self.fixtures.fixture_path(rules_path);
        if !fixture_path.is_file() {
            info!(rules = %rules_path.display(), "No tests found");
            return result;
        }
        result.fixture_path = Some(fixture_path.clone());

        let test_file = match self.fixtures.load(&fixture_path) {
            Ok(test_file) => test_file,
            Err(e) => {
                warn!(fixture = %fixture_path.display(), error = %e, "Fixture rejected");
                result.record_error(e);
                return result;
            }
        };

        for case in &test_file.cases {
            self.run_case(rules.as_ref(), case, &mut result);
        }

        result
    }

    fn run_case(&self, rules: &dyn CompiledRules, case: &FixtureCase, result: &mut RuleTestResult) {
        match self.evaluate(rules, case) {
            Ok(Some((test_case, fired))) => {
                for rule in &test_case.expects_match {
                    result.record(rule, &test_case.name, fired.contains(rule), true);
                }
                for rule in &test_case.expects_no_match {
                    result.record(rule, &test_case.name, fired.contains(rule), false);
                }
            }
            Ok(None) => debug!(test = %case.name, "Skipped"),
            Err(e) => {
                debug!(test = %case.name, error = %e, "Test case errored");
                result.record_case_error(&case.name, e);
            }
        }
    }

    /// `None` for skipped cases, otherwise the case and its fired rule set
    ///
    /// Skipped entries are never validated.
    fn evaluate(
        &self,
        rules: &dyn CompiledRules,
        case: &FixtureCase,
    ) -> Result<Option<(TestCase, BTreeSet<String>)>> {
        if case.skip {
            return Ok(None);
        }
        let test_case = case.parse()?;

        let externals = self.schema.with_overrides(self.declared_data(&test_case))?;
        let fired = rules.fired_rules(EMPTY_CONTENT, &externals)?;
        debug!(test = %test_case.name, fired = ?fired, "Matched");

        Ok(Some((test_case, fired)))
    }

    /// Normalized `data` limited to declared variables
    ///
    /// Rules cannot reference an undeclared name, so such keys are dropped.
    fn declared_data(&self, test_case: &TestCase) -> Vec<(String, ExternalValue)> {
        let (declared, ignored): (Vec<_>, Vec<_>) = test_case
            .normalized_data(&self.list_separator)
            .into_iter()
            .partition(|(name, _)| self.schema.contains(name));

        for (name, _) in &ignored {
            warn!(
                test = %test_case.name,
                variable = %name,
                "Ignoring undeclared external variable"
            );
        }
        declared
    }
}
