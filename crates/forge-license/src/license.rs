//! A single license and its body template

use chrono::Datelike;
use forge_config::Configuration;
use forge_template::{placeholders, substitute};

use crate::{Error, Result};

/// Copyright holder used when none is configured.
pub const DEFAULT_HOLDER: &str = "Your Name";

/// A license with its body template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    /// SPDX identifier, e.g. `MIT`.
    pub id: String,
    pub title: String,
    pub description: String,
    pub body_template: String,
}

impl License {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        body_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            body_template: body_template.into(),
        }
    }

    /// Substitute `year` and `fullname` into the body.
    ///
    /// # Errors
    /// `IncompleteLicenseSubstitution` if any placeholder remains afterwards.
    pub fn render(&self, fullname: &str, year: &str) -> Result<String> {
        let scope = Configuration::new()
            .with("year", year)
            .with("fullname", fullname);
        let text = substitute(&self.body_template, &scope);

        let tokens = placeholders(&text);
        if !tokens.is_empty() {
            return Err(Error::IncompleteLicenseSubstitution {
                id: self.id.clone(),
                tokens,
            });
        }
        Ok(text)
    }
}

/// The current local year as text.
pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}
