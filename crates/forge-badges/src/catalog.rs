//! Badge presets and the catalog that holds them

use forge_config::Configuration;

use crate::badge::{Badge, BadgeSpec};
use crate::builtins;
use crate::{Error, Result};

/// Separator used between badges when joining markdown.
pub const DEFAULT_SEPARATOR: &str = " ";

/// A named, ordered list of badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgePreset {
    pub name: String,
    pub badges: Vec<BadgeSpec>,
}

impl BadgePreset {
    pub fn new(name: impl Into<String>, badges: Vec<BadgeSpec>) -> Self {
        Self {
            name: name.into(),
            badges,
        }
    }
}

/// Presets keyed by unique name.
///
/// # Example
///
/// ```
/// use forge_badges::BadgeCatalog;
/// use forge_config::Configuration;
///
/// let catalog = BadgeCatalog::with_builtins();
/// let config = Configuration::new().with("license", "MIT");
/// let badges = catalog.render("minimal", &config).unwrap();
/// assert_eq!(
///     badges,
///     vec!["[![license](https://img.shields.io/badge/license-MIT-blue.svg)](LICENSE)"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct BadgeCatalog {
    presets: Vec<BadgePreset>,
}

impl BadgeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in presets registered.
    pub fn with_builtins() -> Self {
        Self {
            presets: builtins::presets(),
        }
    }

    /// Register a preset. Fails if the name is already taken.
    pub fn register(&mut self, preset: BadgePreset) -> Result<()> {
        if self.contains(&preset.name) {
            return Err(Error::DuplicatePreset { name: preset.name });
        }
        self.presets.push(preset);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&BadgePreset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPreset {
                name: name.to_string(),
            })
    }

    /// Rendered badges of a preset, in declaration order.
    pub fn badges(&self, name: &str, config: &Configuration) -> Result<Vec<Badge>> {
        let preset = self.get(name)?;
        tracing::debug!(preset = %name, count = preset.badges.len(), "Rendering badges");
        Ok(preset.badges.iter().map(|spec| spec.render(config)).collect())
    }

    /// Markdown for each badge of a preset, in declaration order.
    pub fn render(&self, name: &str, config: &Configuration) -> Result<Vec<String>> {
        Ok(self
            .badges(name, config)?
            .iter()
            .map(Badge::markdown)
            .collect())
    }

    /// All badges of a preset joined by `separator`.
    pub fn render_markdown(
        &self,
        name: &str,
        config: &Configuration,
        separator: &str,
    ) -> Result<String> {
        Ok(self.render(name, config)?.join(separator))
    }

    /// Sorted preset names.
    pub fn list_presets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = BadgeCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.list_presets().is_empty());
    }

    #[test]
    fn test_with_builtins() {
        let catalog = BadgeCatalog::with_builtins();
        assert_eq!(
            catalog.list_presets(),
            vec![
                "api",
                "github_standard",
                "minimal",
                "node_package",
                "python_cli",
                "python_library",
                "rust_crate",
                "web_app",
            ]
        );
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut catalog = BadgeCatalog::with_builtins();
        let result = catalog.register(BadgePreset::new("minimal", vec![]));
        assert!(matches!(result, Err(Error::DuplicatePreset { name }) if name == "minimal"));
    }

    #[test]
    fn test_register_custom_preset() {
        let mut catalog = BadgeCatalog::new();
        catalog
            .register(BadgePreset::new(
                "mine",
                vec![BadgeSpec::new("status", "status", "wip", "orange", "")],
            ))
            .unwrap();

        let rendered = catalog.render("mine", &Configuration::new()).unwrap();
        assert_eq!(
            rendered,
            vec!["![status](https://img.shields.io/badge/status-wip-orange.svg)"]
        );
    }

    #[test]
    fn test_unknown_preset() {
        let catalog = BadgeCatalog::with_builtins();
        let result = catalog.render("does-not-exist", &Configuration::new());
        assert!(matches!(result, Err(Error::UnknownPreset { name }) if name == "does-not-exist"));
    }
}
