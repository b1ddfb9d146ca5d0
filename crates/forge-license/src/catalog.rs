//! License catalog with identifier aliases

use crate::builtins;
use crate::license::{License, current_year};
use crate::{Error, Result};

/// Licenses in registration order, plus case-insensitive aliases.
///
/// # Example
///
/// ```
/// use forge_license::LicenseCatalog;
///
/// let catalog = LicenseCatalog::with_builtins();
/// let text = catalog.render("mit", "Jane Doe", "2024").unwrap();
/// assert!(text.contains("Copyright (c) 2024 Jane Doe"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LicenseCatalog {
    licenses: Vec<License>,
    /// Lowercase alias to canonical id.
    aliases: Vec<(String, String)>,
}

impl LicenseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in licenses and aliases.
    pub fn with_builtins() -> Self {
        Self {
            licenses: builtins::licenses(),
            aliases: builtins::ALIASES
                .iter()
                .map(|&(alias, id)| (alias.to_string(), id.to_string()))
                .collect(),
        }
    }

    /// Register a license. Ids are unique regardless of case.
    pub fn register(&mut self, license: License) -> Result<()> {
        if self.find(&license.id).is_some() {
            return Err(Error::DuplicateLicense { id: license.id });
        }
        self.licenses.push(license);
        Ok(())
    }

    /// Map an alternative name onto a registered id.
    pub fn add_alias(&mut self, alias: &str, id: &str) -> Result<()> {
        let canonical = self.get(id)?.id.clone();
        self.aliases.push((alias.to_lowercase(), canonical));
        Ok(())
    }

    fn find(&self, id: &str) -> Option<&License> {
        self.licenses
            .iter()
            .find(|l| l.id.eq_ignore_ascii_case(id))
    }

    /// Canonical id for an id or alias, matched case-insensitively.
    pub fn resolve_id(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if let Some(license) = self.find(name) {
            return Some(license.id.as_str());
        }
        let lowered = name.to_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .and_then(|(_, id)| self.find(id))
            .map(|l| l.id.as_str())
    }

    pub fn get(&self, name: &str) -> Result<&License> {
        self.resolve_id(name)
            .and_then(|id| self.find(id))
            .ok_or_else(|| Error::UnknownLicense {
                id: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve_id(name).is_some()
    }

    /// Render a license body for `fullname` and `year`.
    pub fn render(&self, name: &str, fullname: &str, year: &str) -> Result<String> {
        let license = self.get(name)?;
        tracing::debug!(license = %license.id, year, "Rendering license");
        license.render(fullname, year)
    }

    /// Render with the current year.
    pub fn render_current_year(&self, name: &str, fullname: &str) -> Result<String> {
        self.render(name, fullname, &current_year())
    }

    /// SPDX id for badges, or the input unchanged when it is not known.
    pub fn badge_name(&self, name: &str) -> String {
        self.resolve_id(name).unwrap_or(name).to_string()
    }

    /// `(id, title)` pairs in catalog order.
    pub fn list_licenses(&self) -> Vec<(&str, &str)> {
        self.licenses
            .iter()
            .map(|l| (l.id.as_str(), l.title.as_str()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &License> {
        self.licenses.iter()
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}
