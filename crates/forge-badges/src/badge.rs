//! Badge specifications and rendered badges

use std::fmt;

use forge_config::Configuration;
use forge_template::{placeholders, substitute};

pub const SHIELDS_BASE_URL: &str = "https://img.shields.io/badge";

/// How to build one badge from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    /// Left-hand text, also used as alt text.
    pub label: String,
    /// Configuration key supplying the right-hand text.
    pub message_key: String,
    /// Right-hand text when `message_key` is absent or empty.
    pub fallback_message: String,
    pub color: String,
    /// Link target, may contain `{{ key }}` placeholders.
    pub link_template: String,
}

impl BadgeSpec {
    pub fn new(
        label: impl Into<String>,
        message_key: impl Into<String>,
        fallback_message: impl Into<String>,
        color: impl Into<String>,
        link_template: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            message_key: message_key.into(),
            fallback_message: fallback_message.into(),
            color: color.into(),
            link_template: link_template.into(),
        }
    }

    /// The message shown on the badge.
    pub fn message(&self, config: &Configuration) -> String {
        match config.get(&self.message_key) {
            Some(value) => {
                let text = value.to_string();
                if text.is_empty() {
                    self.fallback_message.clone()
                } else {
                    text
                }
            }
            None => self.fallback_message.clone(),
        }
    }

    /// Expanded link, or `None` when the template is empty or still has
    /// unresolved placeholders after substitution.
    pub fn link(&self, config: &Configuration) -> Option<String> {
        if self.link_template.is_empty() {
            return None;
        }
        let link = substitute(&self.link_template, config);
        let missing = placeholders(&link);
        if !missing.is_empty() {
            tracing::debug!(label = %self.label, ?missing, "Dropping badge link");
            return None;
        }
        Some(link)
    }

    pub fn render(&self, config: &Configuration) -> Badge {
        let message = self.message(config);
        let url = format!(
            "{}/{}-{}-{}.svg",
            SHIELDS_BASE_URL,
            escape_segment(&self.label),
            escape_segment(&message),
            escape_segment(&self.color),
        );
        Badge {
            alt: self.label.clone(),
            url,
            link: self.link(config),
        }
    }
}

/// Escape one path segment of a static shields.io badge URL.
///
/// Dashes and underscores are doubled (single ones are separators), then the
/// result is percent-encoded.
///
/// # Example
/// ```
/// use forge_badges::escape_segment;
///
/// assert_eq!(escape_segment("last commit"), "last%20commit");
/// assert_eq!(escape_segment("BSD-3-Clause"), "BSD--3--Clause");
/// assert_eq!(escape_segment(">=18"), "%3E%3D18");
/// ```
pub fn escape_segment(segment: &str) -> String {
    let doubled = segment.replace('-', "--").replace('_', "__");
    urlencoding::encode(&doubled).into_owned()
}

/// A rendered badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub alt: String,
    pub url: String,
    pub link: Option<String>,
}

impl Badge {
    /// Markdown image, wrapped in a link when there is one.
    pub fn markdown(&self) -> String {
        match &self.link {
            Some(link) => format!("[![{}]({})]({})", self.alt, self.url, link),
            None => format!("![{}]({})", self.alt, self.url),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markdown())
    }
}
