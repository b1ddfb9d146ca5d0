//! Named README templates composed from ordered sections

use crate::builtins;
use crate::template::Template;
use crate::{Error, Result};

/// One titled part of a README template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    /// Heading text, empty for the header section.
    pub title: String,
    /// Template source for this section.
    pub content: String,
}

impl Section {
    pub fn new(name: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A README template: sections in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTemplate {
    pub name: String,
    pub description: String,
    /// Project kinds this template suits (e.g. "cli", "library").
    pub project_types: Vec<String>,
    pub sections: Vec<Section>,
}

impl NamedTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        project_types: Vec<String>,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            project_types,
            sections,
        }
    }

    /// Full template source: section sources concatenated in order.
    pub fn source(&self) -> String {
        self.sections.iter().map(|s| s.content.as_str()).collect()
    }

    /// Parse the full source.
    pub fn parse(&self) -> Result<Template> {
        Template::parse(&self.source())
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }
}

/// An injected, read-only set of templates.
///
/// # Example
/// ```
/// use forge_template::TemplateCatalog;
///
/// let catalog = TemplateCatalog::with_builtins();
/// assert!(catalog.get("minimal").is_ok());
/// assert!(catalog.get("nope").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<NamedTemplate>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in templates.
    pub fn with_builtins() -> Self {
        Self {
            templates: builtins::templates(),
        }
    }

    /// Add a template. Names must be unique within the catalog.
    pub fn register(&mut self, template: NamedTemplate) -> Result<()> {
        if self.contains(&template.name) {
            return Err(Error::DuplicateTemplate {
                name: template.name,
            });
        }
        self.templates.push(template);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.iter().any(|t| t.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&NamedTemplate> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::UnknownTemplate {
                name: name.to_string(),
            })
    }

    /// Template names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// `(name, description)` pairs in registration order.
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.templates
            .iter()
            .map(|t| (t.name.as_str(), t.description.as_str()))
            .collect()
    }

    /// Section names of one template.
    pub fn sections(&self, name: &str) -> Result<Vec<&str>> {
        Ok(self.get(name)?.section_names())
    }

    /// First template that lists `project_type`.
    pub fn for_project_type(&self, project_type: &str) -> Option<&NamedTemplate> {
        self.templates
            .iter()
            .find(|t| t.project_types.iter().any(|p| p == project_type))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
