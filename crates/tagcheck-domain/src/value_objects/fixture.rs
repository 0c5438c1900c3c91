//! Fixture Value Objects
//!
//! A fixture is a JSON list of test cases paired with one rule file.
//! Loading happens in two steps: the document is checked as a whole when it
//! is read ([`TestFile::from_json`]), and each entry is validated into a
//! [`TestCase`] right before it runs, so one badly shaped case cannot hide
//! the results of its siblings.

use crate::error::{Error, Result};
use crate::value_objects::ExternalValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Value supplied for one external variable in a fixture's `data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureValue {
    /// Integer value, passed through
    Integer(i64),
    /// String value, passed through
    Text(String),
    /// Several values collected under one tag, joined before matching
    List(Vec<String>),
}

impl FixtureValue {
    /// Collapse into the single value handed to the engine
    ///
    /// ```rust
    /// use tagcheck_domain::value_objects::{ExternalValue, FixtureValue};
    ///
    /// let domains = FixtureValue::List(vec!["a.com".into(), "b.com".into()]);
    /// assert_eq!(domains.normalize(" | "), ExternalValue::from("a.com | b.com"));
    /// ```
    pub fn normalize(&self, separator: &str) -> ExternalValue {
        match self {
            Self::Integer(value) => ExternalValue::Integer(*value),
            Self::Text(value) => ExternalValue::Text(value.clone()),
            Self::List(values) => ExternalValue::Text(values.join(separator)),
        }
    }
}

/// One validated fixture entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Name used in report lines
    pub name: String,
    /// Rules that must fire
    #[serde(default)]
    pub expects_match: Vec<String>,
    /// Rules that must not fire
    #[serde(default)]
    pub expects_no_match: Vec<String>,
    /// External variable overrides
    #[serde(default)]
    pub data: BTreeMap<String, FixtureValue>,
    /// Skipped cases produce no entries at all
    #[serde(default)]
    pub skip: bool,
}

impl TestCase {
    /// `data` with list values joined, ready to override the defaults
    pub fn normalized_data(&self, separator: &str) -> Vec<(String, ExternalValue)> {
        self.data
            .iter()
            .map(|(name, value)| (name.clone(), value.normalize(separator)))
            .collect()
    }
}

/// A fixture entry that has a name but has not been validated further
///
/// `skip` is read straight from the raw entry so a skipped case is never
/// validated, whatever the shape of its other fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureCase {
    /// Case name, always present
    pub name: String,
    /// True only when the entry holds `"skip": true`
    pub skip: bool,
    raw: serde_json::Value,
}

impl FixtureCase {
    /// Validate the full entry
    pub fn parse(&self) -> Result<TestCase> {
        serde_json::from_value(self.raw.clone()).map_err(Error::from)
    }
}

/// Ordered fixture entries read from one document
#[derive(Debug, Clone, PartialEq)]
pub struct TestFile {
    /// Where the document was read from
    pub path: PathBuf,
    /// Entries in document order
    pub cases: Vec<FixtureCase>,
}

impl TestFile {
    /// Parse a fixture document
    ///
    /// Fails when the text is not JSON, is not a list, or holds an entry
    /// that is not an object with a string `name`.
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| Error::fixture(path, format!("malformed JSON: {e}")))?;

        let serde_json::Value::Array(entries) = document else {
            return Err(Error::fixture(path, "expected a list of test cases"));
        };

        let cases = entries
            .into_iter()
            .enumerate()
            .map(|(index, raw)| -> Result<FixtureCase> {
                let entry = raw
                    .as_object()
                    .ok_or_else(|| Error::fixture(path, format!("entry {index} is not an object")))?;
                let name = entry
                    .get("name")
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| {
                        Error::fixture(path, format!("entry {index} has no string 'name' field"))
                    })?
                    .to_string();
                let skip = entry
                    .get("skip")
                    .and_then(serde_json::Value::as_bool)
                    .unwrap_or(false);
                Ok(FixtureCase { name, skip, raw })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            cases,
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True if the document is an empty list
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
