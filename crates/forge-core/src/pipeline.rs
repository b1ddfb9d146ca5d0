//! Generation runs

use forge_badges::{BadgeCatalog, DEFAULT_SEPARATOR};
use forge_config::Configuration;
use forge_license::{DEFAULT_HOLDER, LicenseCatalog, current_year};
use forge_template::{Template, TemplateCatalog, resolve, substitute, table_of_contents, unresolved};

use crate::Result;

/// Keys the pipeline binds for templates to use.
pub const LICENSE_KEY: &str = "license";
pub const BADGES_KEY: &str = "badges";
pub const LICENSE_TEXT_KEY: &str = "license_text";
pub const TOC_KEY: &str = "table_of_contents";

/// Per-run switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render the license and splice it into `{{ license_text }}`.
    pub include_license: bool,
    /// Badge preset to render; falls back to the `badge_preset` key.
    pub badge_preset: Option<String>,
    /// License id or alias. Replaces the `license` key for this run.
    pub license: Option<String>,
}

impl GenerateOptions {
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.include_license = true;
        self.license = Some(license.into());
        self
    }

    pub fn with_badges(mut self, preset: impl Into<String>) -> Self {
        self.badge_preset = Some(preset.into());
        self
    }
}

/// Output of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub readme: String,
    /// Rendered license body, when requested.
    pub license: Option<String>,
}

/// Holds the catalogs a run draws from.
#[derive(Debug, Clone)]
pub struct Engine {
    templates: TemplateCatalog,
    badges: BadgeCatalog,
    licenses: LicenseCatalog,
}

impl Engine {
    pub fn new(templates: TemplateCatalog, badges: BadgeCatalog, licenses: LicenseCatalog) -> Self {
        Self {
            templates,
            badges,
            licenses,
        }
    }

    pub fn with_builtins() -> Self {
        Self::new(
            TemplateCatalog::with_builtins(),
            BadgeCatalog::with_builtins(),
            LicenseCatalog::with_builtins(),
        )
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn badges(&self) -> &BadgeCatalog {
        &self.badges
    }

    pub fn licenses(&self) -> &LicenseCatalog {
        &self.licenses
    }

    /// Render a catalog template by name.
    pub fn generate_named(
        &self,
        name: &str,
        config: &Configuration,
        options: &GenerateOptions,
    ) -> Result<Document> {
        let source = self.templates.get(name)?.source();
        self.generate(&source, config, options)
    }

    /// Compose a document from template source.
    ///
    /// `config` is not modified. Generated values (badge markup, license
    /// text, table of contents) are bound into a copy of it.
    pub fn generate(
        &self,
        template_src: &str,
        config: &Configuration,
        options: &GenerateOptions,
    ) -> Result<Document> {
        let template = Template::parse(template_src)?;
        let mut scope = config.clone();

        if let Some(id) = options.license.as_deref() {
            scope.insert(LICENSE_KEY, self.licenses.badge_name(id));
        }

        self.bind_badges(&mut scope, options)?;

        let license = if options.include_license {
            let text = self.render_license(&scope)?;
            scope.insert(LICENSE_TEXT_KEY, text.trim_end());
            Some(text)
        } else {
            None
        };

        let mut resolved = resolve(&template, &scope).text();

        if !scope.contains_key(TOC_KEY) {
            scope.insert(TOC_KEY, table_of_contents(&resolved));

            // A section guarded by the table of contents needs a second pass.
            let guarded = template.guard_keys().iter().any(|key| key == TOC_KEY);
            if guarded && scope.is_enabled(TOC_KEY) {
                resolved = resolve(&template, &scope).text();
                scope.insert(TOC_KEY, table_of_contents(&resolved));
            }
        }

        let missing = unresolved(&resolved, &scope);
        if !missing.is_empty() {
            tracing::debug!(?missing, "Placeholders without values");
        }

        Ok(Document {
            readme: substitute(&resolved, &scope),
            license,
        })
    }

    fn bind_badges(&self, scope: &mut Configuration, options: &GenerateOptions) -> Result<()> {
        let preset = match options.badge_preset.as_deref() {
            Some(preset) => preset.to_string(),
            None if scope.contains_key(BADGES_KEY) => return Ok(()),
            None => match scope.first_str(&["badge_preset"]) {
                Some(preset) => preset.to_string(),
                None => return Ok(()),
            },
        };

        let markup = self
            .badges
            .render_markdown(&preset, scope, DEFAULT_SEPARATOR)?;
        scope.insert(BADGES_KEY, markup);
        Ok(())
    }

    fn render_license(&self, config: &Configuration) -> Result<String> {
        let id = config
            .first_str(&[LICENSE_KEY])
            .ok_or_else(|| forge_license::Error::UnknownLicense { id: String::new() })?;

        let fullname = config
            .first_str(&["fullname", "author_name", "github_username"])
            .unwrap_or(DEFAULT_HOLDER);
        let year = match config.get("year") {
            Some(year) => year.to_string(),
            None => current_year(),
        };

        Ok(self.licenses.render(id, fullname, &year)?)
    }
}
