//! Fixture lookup and loading.
//!
//! A rule file `dir/name.rules` is paired with `dir/tests/name.json`.

use std::path::{Path, PathBuf};
use tagcheck_domain::value_objects::{HarnessConfig, TestFile};
use tagcheck_domain::{Error, Result};

/// Locates and reads fixture documents
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    tests_dir: String,
    extension: String,
}

impl FixtureLoader {
    /// Loader for `<rule dir>/<tests_dir>/<stem>.<extension>`
    pub fn new(tests_dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            tests_dir: tests_dir.into(),
            extension: extension.into(),
        }
    }

    /// Loader following the harness configuration
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.tests_dir, &config.fixture_extension)
    }

    /// Where the fixture for `rules_path` would be
    pub fn fixture_path(&self, rules_path: &Path) -> PathBuf {
        let stem = rules_path.file_stem().unwrap_or_default();
        let mut file_name = stem.to_os_string();
        file_name.push(".");
        file_name.push(&self.extension);

        rules_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.tests_dir)
            .join(file_name)
    }

    /// Read and parse the fixture at `fixture_path`
    ///
    /// The file is read fully and closed before parsing.
    pub fn load(&self, fixture_path: &Path) -> Result<TestFile> {
        let json = std::fs::read_to_string(fixture_path)
            .map_err(|e| Error::fixture(fixture_path, format!("cannot read fixture: {e}")))?;
        TestFile::from_json(fixture_path, &json)
    }
}
