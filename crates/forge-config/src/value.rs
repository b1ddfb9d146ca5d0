//! Configuration values

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single configuration value.
///
/// Persisted untagged, so a config file stays a flat object of strings and
/// booleans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean value, normally used as a section guard.
    Flag(bool),
    /// Free text, normally substituted into a placeholder.
    Text(String),
}

impl ConfigValue {
    /// Guard coercion: flags are themselves, text is true when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::Flag(b) => *b,
            ConfigValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Flag(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Flag(b) => Some(*b),
            ConfigValue::Text(_) => None,
        }
    }
}

/// Substitution coercion: text verbatim, flags as `true`/`false`.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Flag(b) => write!(f, "{}", b),
            ConfigValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Flag(b)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}
