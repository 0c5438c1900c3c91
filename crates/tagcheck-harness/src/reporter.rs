//! Console Report Generation
//!
//! Prints one block per rule file and a closing total:
//!
//! ```text
//! OK: All tests passed for tagcheck/indicators.rules
//!    [O] matched flag_bad_exe in bad_exe
//! FAIL: Some tests failed for tagcheck/network.rules
//!    [X] not matched bad_domain in domains
//!    [E] Error in test sizes: External variable 'al_file_size': expected integer, got string
//! Total: 2 files, 1 failed
//! ```
//!
//! Pass markers are green, failures and errors bold red, rule names blue.
//! Files without a fixture get a `[-] No tests found` notice even when
//! passing files are hidden.

use nu_ansi_term::{Color, Style};
use std::io::{self, Write};
use tagcheck_domain::value_objects::{
    AssertionOutcome, ExternalVariableSet, RuleTestResult, RunSummary,
};

/// Report generator
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
    skip_ok: bool,
}

impl Reporter {
    /// Create a reporter
    pub fn new(color: bool, skip_ok: bool) -> Self {
        Self { color, skip_ok }
    }

    /// Write the report for `results` and return the totals
    pub fn write_results<W: Write>(
        &self,
        out: &mut W,
        results: &[RuleTestResult],
    ) -> io::Result<RunSummary> {
        for result in results {
            if result.is_ok() {
                if !self.skip_ok {
                    self.write_ok(out, result)?;
                }
                if !result.has_fixture() {
                    writeln!(out, "   [-] No tests found for {}", result.rules_path.display())?;
                }
            } else {
                self.write_fail(out, result)?;
            }
        }

        let summary = RunSummary::from_results(results);
        writeln!(out, "{summary}")?;
        Ok(summary)
    }

    /// Generate the report as a string
    pub fn to_text(&self, results: &[RuleTestResult]) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_results(&mut buffer, results);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// List declared external variables with their defaults
    pub fn write_externals<W: Write>(
        &self,
        out: &mut W,
        schema: &ExternalVariableSet,
    ) -> io::Result<()> {
        for (name, default) in schema.iter() {
            writeln!(out, "{} = {default}", self.paint(Color::Blue.normal(), name))?;
        }
        Ok(())
    }

    fn write_ok<W: Write>(&self, out: &mut W, result: &RuleTestResult) -> io::Result<()> {
        writeln!(
            out,
            "{}: All tests passed for {}",
            self.paint(Color::Green.normal(), "OK"),
            result.rules_path.display()
        )?;
        for outcome in &result.passed {
            self.write_entry(out, Color::Green.normal(), "O", outcome)?;
        }
        Ok(())
    }

    fn write_fail<W: Write>(&self, out: &mut W, result: &RuleTestResult) -> io::Result<()> {
        let red = Color::Red.bold();
        writeln!(
            out,
            "{}: Some tests failed for {}",
            self.paint(red, "FAIL"),
            result.rules_path.display()
        )?;
        for outcome in &result.failed {
            self.write_entry(out, red, "X", outcome)?;
        }
        for error in &result.errors {
            writeln!(out, "   [{}] {error}", self.paint(red, "E"))?;
        }
        Ok(())
    }

    fn write_entry<W: Write>(
        &self,
        out: &mut W,
        marker_style: Style,
        marker: &str,
        outcome: &AssertionOutcome,
    ) -> io::Result<()> {
        writeln!(
            out,
            "   [{}] {} {} in {}",
            self.paint(marker_style, marker),
            outcome.verb(),
            self.paint(Color::Blue.normal(), &outcome.rule),
            outcome.test_name
        )
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}
