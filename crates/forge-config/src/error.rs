//! Error types for forge-config

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to read configuration at {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: forge_fs::Error,
    },

    #[error("Failed to write configuration to {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: forge_fs::Error,
    },
}
