//! Layered configuration merge
//!
//! Four layers are merged in a fixed order, later layers overriding earlier
//! ones:
//! 1. Built-in defaults
//! 2. Persisted configuration file
//! 3. Repository-detected metadata
//! 4. Explicit user input
//!
//! Any layer may be absent. Override is decided by presence of a key, not by
//! its truthiness, so a user can clear a detected value with `""` or `false`.

use crate::configuration::Configuration;

/// The four configuration sources of a generation run.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    pub defaults: Option<Configuration>,
    pub persisted: Option<Configuration>,
    pub detected: Option<Configuration>,
    pub user: Option<Configuration>,
}

impl Layers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the built-in defaults.
    pub fn with_builtin_defaults() -> Self {
        Self {
            defaults: Some(Configuration::defaults()),
            ..Self::default()
        }
    }

    pub fn defaults(mut self, layer: Configuration) -> Self {
        self.defaults = Some(layer);
        self
    }

    pub fn persisted(mut self, layer: Option<Configuration>) -> Self {
        self.persisted = layer;
        self
    }

    pub fn detected(mut self, layer: Configuration) -> Self {
        self.detected = Some(layer);
        self
    }

    pub fn user(mut self, layer: Configuration) -> Self {
        self.user = Some(layer);
        self
    }

    /// Merge all present layers into the resolved configuration.
    pub fn merge(&self) -> Configuration {
        merge(
            self.defaults.as_ref(),
            self.persisted.as_ref(),
            self.detected.as_ref(),
            self.user.as_ref(),
        )
    }
}

/// Merge the four layers, lowest precedence first.
pub fn merge(
    defaults: Option<&Configuration>,
    persisted: Option<&Configuration>,
    detected: Option<&Configuration>,
    user: Option<&Configuration>,
) -> Configuration {
    let mut merged = Configuration::new();

    let layers = [
        ("defaults", defaults),
        ("persisted", persisted),
        ("detected", detected),
        ("user", user),
    ];

    for (name, layer) in layers {
        match layer {
            Some(layer) => {
                tracing::debug!(layer = name, keys = layer.len(), "Merging config layer");
                merged.overlay(layer);
            }
            None => {
                tracing::debug!(layer = name, "Config layer absent - skipping");
            }
        }
    }

    merged
}
