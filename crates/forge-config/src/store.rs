//! Loading and saving the persisted configuration file
//!
//! The canonical format is a flat JSON object of string keys to string or
//! boolean values. TOML and YAML files with the same flat shape are also
//! accepted, chosen by file extension.

use std::path::Path;

use crate::configuration::Configuration;
use crate::{Error, Result};

/// File name used when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "readme-forge.json";

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
        }
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Configuration> {
        let parsed = match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: self.name().into(),
            message,
        })
    }

    fn serialize(&self, path: &Path, config: &Configuration) -> Result<String> {
        let serialized = match self {
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map(|s| s + "\n")
                .map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        };
        serialized.map_err(|message| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: self.name().into(),
            message,
        })
    }
}

/// Reads and writes configuration files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a configuration file that was explicitly requested.
    ///
    /// # Errors
    /// `ConfigNotFound` when the file does not exist, `ConfigParse` when it is
    /// not a flat map of strings and booleans.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Configuration> {
        let path = path.as_ref();
        self.load_optional(path)?
            .ok_or_else(|| Error::ConfigNotFound {
                path: path.to_path_buf(),
            })
    }

    /// Load a configuration file that may legitimately be missing.
    pub fn load_optional(&self, path: impl AsRef<Path>) -> Result<Option<Configuration>> {
        let path = path.as_ref();

        let content = forge_fs::read_text_optional(path).map_err(|source| Error::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        match content {
            Some(content) => {
                let format = ConfigFormat::from_path(path)?;
                let config = format.parse(path, &content)?;
                tracing::debug!(?path, keys = config.len(), "Loaded configuration");
                Ok(Some(config))
            }
            None => {
                tracing::debug!(?path, "No configuration file found");
                Ok(None)
            }
        }
    }

    /// Persist a configuration with an atomic write.
    ///
    /// The target is either fully replaced or left as it was.
    pub fn save(&self, config: &Configuration, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = format.serialize(path, config)?;

        forge_fs::write_text(path, &content).map_err(|source| Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(?path, keys = config.len(), "Saved configuration");
        Ok(())
    }
}
