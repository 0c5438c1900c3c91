//! Result Value Objects
//!
//! Outcomes accumulated while one rule file is tested, and the run-level
//! summary derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One evaluated expectation: did `rule` fire during `test_name`?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionOutcome {
    /// Rule the expectation is about
    pub rule: String,
    /// Test case that produced it
    pub test_name: String,
    /// Whether the rule was in the fired set
    pub fired: bool,
}

impl AssertionOutcome {
    /// Text before the rule name (`matched` / `not matched`)
    pub fn verb(&self) -> &'static str {
        if self.fired { "matched" } else { "not matched" }
    }
}

impl fmt::Display for AssertionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} in {}", self.verb(), self.rule, self.test_name)
    }
}

/// Aggregated outcome for one rule file
///
/// Created when testing of the file starts, appended to while its cases
/// run, then handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTestResult {
    /// Rule file under test
    pub rules_path: PathBuf,
    /// Fixture that was run, if one exists
    pub fixture_path: Option<PathBuf>,
    /// Expectations that held
    pub passed: Vec<AssertionOutcome>,
    /// Expectations that did not hold
    pub failed: Vec<AssertionOutcome>,
    /// File-scoped and case-scoped errors
    pub errors: Vec<String>,
}

impl RuleTestResult {
    /// Empty result for `rules_path`
    pub fn new(rules_path: impl Into<PathBuf>) -> Self {
        Self {
            rules_path: rules_path.into(),
            fixture_path: None,
            passed: Vec::new(),
            failed: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record whether `rule` fired in `test_name`, given what was expected
    pub fn record(&mut self, rule: &str, test_name: &str, fired: bool, expected_fired: bool) {
        let outcome = AssertionOutcome {
            rule: rule.to_string(),
            test_name: test_name.to_string(),
            fired,
        };
        if fired == expected_fired {
            self.passed.push(outcome);
        } else {
            self.failed.push(outcome);
        }
    }

    /// Record an error for the whole file
    pub fn record_error(&mut self, error: impl fmt::Display) {
        self.errors.push(error.to_string());
    }

    /// Record an error scoped to one test case
    pub fn record_case_error(&mut self, test_name: &str, error: impl fmt::Display) {
        self.errors.push(format!("Error in test {test_name}: {error}"));
    }

    /// No failures and no errors
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty() && self.errors.is_empty()
    }

    /// True if a fixture was found next to the rule file
    pub fn has_fixture(&self) -> bool {
        self.fixture_path.is_some()
    }
}

/// File counts for the closing summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Rule files tested
    pub total_files: usize,
    /// Rule files with at least one failure or error
    pub failed_files: usize,
}

impl RunSummary {
    /// Count totals over a run
    pub fn from_results(results: &[RuleTestResult]) -> Self {
        Self {
            total_files: results.len(),
            failed_files: results.iter().filter(|r| !r.is_ok()).count(),
        }
    }

    /// True when no file failed
    pub fn passed(&self) -> bool {
        self.failed_files == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} files, {} failed",
            self.total_files, self.failed_files
        )
    }
}
