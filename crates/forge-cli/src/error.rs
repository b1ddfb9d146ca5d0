//! Error types for forge-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from forge-core
    #[error(transparent)]
    Core(#[from] forge_core::Error),

    /// Error from forge-config
    #[error(transparent)]
    Config(#[from] forge_config::Error),

    /// Error from forge-template
    #[error(transparent)]
    Template(#[from] forge_template::Error),

    /// Error from forge-license
    #[error(transparent)]
    License(#[from] forge_license::Error),

    /// Error from forge-fs
    #[error(transparent)]
    Fs(#[from] forge_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
