//! Configuration value objects
//!
//! Settings consumed by the harness. They live in the domain so every layer
//! can share them; loading and layering is done by
//! `tagcheck_infrastructure::config`.

use crate::constants::{
    DEFAULT_EXTERNAL_PREFIX, DEFAULT_FIXTURE_EXTENSION, DEFAULT_INTEGER_FIELDS,
    DEFAULT_LIST_SEPARATOR, DEFAULT_RULE_PATTERN, DEFAULT_RULES_DIR, DEFAULT_TESTS_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rule files and their fixtures live, and how fixtures are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Root directory searched recursively for rule files
    pub rules_dir: PathBuf,
    /// Glob matched against paths relative to `rules_dir`
    pub rule_pattern: String,
    /// Fixture directory name, relative to each rule file's directory
    pub tests_dir: String,
    /// Fixture file extension (without the dot)
    pub fixture_extension: String,
    /// Separator used when joining list-valued fixture data
    pub list_separator: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from(DEFAULT_RULES_DIR),
            rule_pattern: DEFAULT_RULE_PATTERN.to_string(),
            tests_dir: DEFAULT_TESTS_DIR.to_string(),
            fixture_extension: DEFAULT_FIXTURE_EXTENSION.to_string(),
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

/// Shape of the external variable schema declared to every compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalsConfig {
    /// Identifier prefix (`al` gives `al_file_name`)
    pub prefix: String,
    /// Fields declared in addition to the built-in dictionary
    pub extra_fields: Vec<String>,
    /// Fields declared as integers (defaulting to zero)
    pub integer_fields: Vec<String>,
}

impl Default for ExternalsConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_EXTERNAL_PREFIX.to_string(),
            extra_fields: Vec::new(),
            integer_fields: DEFAULT_INTEGER_FIELDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
