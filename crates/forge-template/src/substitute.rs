//! Placeholder substitution
//!
//! Replaces `{{ key }}` tokens with configuration values. Whitespace around
//! the key is insignificant. Missing keys leave the token untouched, so a
//! partially configured document can be substituted again later.

use forge_config::Configuration;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").expect("Invalid placeholder regex")
});

/// Replace every resolvable placeholder in `text`.
///
/// Values are inserted verbatim: no escaping, and the inserted text is not
/// scanned again.
///
/// # Example
/// ```
/// use forge_config::Configuration;
/// use forge_template::substitute;
///
/// let config = Configuration::new().with("name", "Forge");
/// assert_eq!(substitute("# {{name}} by {{ author }}", &config), "# Forge by {{ author }}");
/// ```
pub fn substitute(text: &str, config: &Configuration) -> String {
    let mut missing = 0usize;

    let result = PLACEHOLDER_REGEX.replace_all(text, |caps: &Captures| {
        match config.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => {
                missing += 1;
                caps[0].to_string()
            }
        }
    });

    if missing > 0 {
        tracing::debug!(missing, "Left unresolved placeholders in place");
    }

    result.into_owned()
}

/// Keys of every placeholder in `text`, in order of first appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(text) {
        let key = &caps[1];
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Placeholder keys in `text` that `config` cannot resolve.
pub fn unresolved(text: &str, config: &Configuration) -> Vec<String> {
    placeholders(text)
        .into_iter()
        .filter(|key| !config.contains_key(key))
        .collect()
}
