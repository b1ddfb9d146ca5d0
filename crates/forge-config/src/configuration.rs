//! The resolved key/value configuration

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::value::ConfigValue;

/// Flat, case-sensitive mapping of keys to values.
///
/// Keys iterate in sorted order, so serialization and debug output are
/// deterministic regardless of the order layers were merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, ConfigValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default layer.
    pub fn defaults() -> Self {
        [
            ("license", "MIT"),
            ("code_language", "bash"),
            ("badge_preset", "github_standard"),
            ("template", "standard"),
        ]
        .into_iter()
        .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// The value for `key` if it is text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// First non-empty text value among `keys`.
    pub fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.get_str(k))
            .find(|s| !s.is_empty())
    }

    /// Guard evaluation. An absent key is `false`.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key).is_some_and(ConfigValue::is_truthy)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.remove(key)
    }

    /// Copy every entry of `higher` over this configuration.
    ///
    /// Presence decides: an entry in `higher` replaces the current value even
    /// when it is `false` or an empty string.
    pub fn overlay(&mut self, higher: &Configuration) {
        for (key, value) in &higher.values {
            if let Some(previous) = self.values.insert(key.clone(), value.clone()) {
                if previous != *value {
                    tracing::debug!(key = %key, from = %previous, to = %value, "Config value overridden");
                }
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
