//! Conditional section resolution

use forge_config::Configuration;

use crate::Result;
use crate::template::{Block, Template};

/// Evaluate every section guard against `config`.
///
/// The result contains only literal blocks, with adjacent literals merged.
/// A guard missing from the configuration is false. When a section is
/// dropped, nested sections inside it are not evaluated at all.
pub fn resolve(template: &Template, config: &Configuration) -> Template {
    let mut out = String::new();
    resolve_into(template, config, &mut out);

    if out.is_empty() {
        Template::default()
    } else {
        Template::new(vec![Block::Literal(out)])
    }
}

fn resolve_into(template: &Template, config: &Configuration, out: &mut String) {
    for block in template.blocks() {
        match block {
            Block::Literal(text) => out.push_str(text),
            Block::Section { guard, line, body } => {
                if config.is_enabled(guard) {
                    resolve_into(body, config, out);
                } else {
                    tracing::debug!(guard = %guard, line, "Dropping section");
                }
            }
        }
    }
}

/// Parse and resolve template source in one step.
///
/// # Errors
/// `MalformedTemplate` when the markers are unbalanced. Nothing is returned
/// for a malformed template, not even the part before the bad marker.
///
/// # Example
/// ```
/// use forge_config::Configuration;
/// use forge_template::resolve_str;
///
/// let config = Configuration::new().with("api", false);
/// let text = resolve_str("# Forge\n<!-- IF api -->\n## API\n<!-- ENDIF api -->\n", &config).unwrap();
/// assert_eq!(text, "# Forge\n");
/// ```
pub fn resolve_str(source: &str, config: &Configuration) -> Result<String> {
    let template = Template::parse(source)?;
    Ok(resolve(&template, config).text())
}
