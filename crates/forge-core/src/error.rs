//! Error types for forge-core

/// Result type for forge-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of a generation run. Component errors pass through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error from forge-config
    #[error(transparent)]
    Config(#[from] forge_config::Error),

    /// Template error from forge-template
    #[error(transparent)]
    Template(#[from] forge_template::Error),

    /// Badge error from forge-badges
    #[error(transparent)]
    Badges(#[from] forge_badges::Error),

    /// License error from forge-license
    #[error(transparent)]
    License(#[from] forge_license::Error),
}
