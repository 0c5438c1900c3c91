//! External Variable Value Objects
//!
//! External variables stand in for metadata that would normally be derived
//! from analysing a real sample. Every rule file is compiled against the
//! same [`ExternalVariableSet`], so rules may reference any declared field
//! whether or not a fixture supplies it.

use crate::constants::{SUBMISSION_FIELDS, TAGGING_FIELDS};
use crate::error::{Error, Result};
use crate::value_objects::ExternalsConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value of a single external variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalValue {
    /// Integer variable
    Integer(i64),
    /// String variable
    Text(String),
}

impl ExternalValue {
    /// Name of the value's type, as shown in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "string",
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Integer(_), Self::Integer(_)) | (Self::Text(_), Self::Text(_))
        )
    }
}

impl fmt::Display for ExternalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<&str> for ExternalValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ExternalValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ExternalValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Value Object: declared external variables and their defaults
///
/// Built once at startup and shared by reference with the compiler and
/// the per-case executor.
///
/// ## Business Rules
///
/// - Identifiers are `<prefix>_<field>` with dots replaced by underscores
/// - Integer fields default to `0`, every other field to `""`
/// - A value map handed to the engine always covers every declared name
///
/// ## Example
///
/// ```rust
/// use tagcheck_domain::value_objects::{ExternalValue, ExternalVariableSet, ExternalsConfig};
///
/// let schema = ExternalVariableSet::from_config(&ExternalsConfig::default());
/// assert_eq!(schema.get("al_file_size"), Some(&ExternalValue::Integer(0)));
/// assert_eq!(schema.get("al_network_static_domain"), Some(&ExternalValue::from("")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExternalVariableSet {
    defaults: BTreeMap<String, ExternalValue>,
}

impl ExternalVariableSet {
    /// Build the schema from the tagging dictionary, the submission fields
    /// and any configured extras
    pub fn from_config(config: &ExternalsConfig) -> Self {
        let fields = TAGGING_FIELDS
            .iter()
            .chain(SUBMISSION_FIELDS.iter())
            .copied()
            .chain(config.extra_fields.iter().map(String::as_str));

        Self::from_fields(&config.prefix, fields, &config.integer_fields)
    }

    /// Build a schema from an explicit field list
    pub fn from_fields<'a, I>(prefix: &str, fields: I, integer_fields: &[String]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let defaults = fields
            .into_iter()
            .map(|field| {
                let default = if integer_fields.iter().any(|f| f == field) {
                    ExternalValue::Integer(0)
                } else {
                    ExternalValue::Text(String::new())
                };
                (Self::identifier(prefix, field), default)
            })
            .collect();

        Self { defaults }
    }

    /// Identifier under which a dotted field is exposed to rules
    pub fn identifier(prefix: &str, field: &str) -> String {
        format!("{prefix}_{}", field.replace('.', "_"))
    }

    /// Number of declared variables
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// True when nothing is declared
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    /// Default value of a declared variable
    pub fn get(&self, name: &str) -> Option<&ExternalValue> {
        self.defaults.get(name)
    }

    /// True if `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// Declared variables in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExternalValue)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Full value map: every default, with `overrides` replacing matching names
    ///
    /// Overriding an undeclared name, or assigning a value of the other
    /// type, is rejected so the engine never sees a partial or ill-typed map.
    pub fn with_overrides<I>(&self, overrides: I) -> Result<ExternalValues>
    where
        I: IntoIterator<Item = (String, ExternalValue)>,
    {
        let mut values = self.defaults.clone();
        for (name, value) in overrides {
            let Some(slot) = values.get_mut(&name) else {
                return Err(Error::variable(name, "not a declared external variable"));
            };
            if !slot.same_kind(&value) {
                return Err(Error::variable(
                    name,
                    format!("expected {}, got {}", slot.kind(), value.kind()),
                ));
            }
            *slot = value;
        }
        Ok(ExternalValues { values })
    }

    /// Value map with nothing overridden
    pub fn defaults(&self) -> ExternalValues {
        ExternalValues {
            values: self.defaults.clone(),
        }
    }
}

/// Complete set of external values for one matching call
///
/// Only obtainable from an [`ExternalVariableSet`], so it always carries
/// every declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalValues {
    values: BTreeMap<String, ExternalValue>,
}

impl ExternalValues {
    /// Value assigned to `name`
    pub fn get(&self, name: &str) -> Option<&ExternalValue> {
        self.values.get(name)
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the map is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assigned variables in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExternalValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
