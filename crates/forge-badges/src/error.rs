//! Error types for forge-badges

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Badge preset not found: {name}")]
    UnknownPreset { name: String },

    #[error("Badge preset already registered: {name}")]
    DuplicatePreset { name: String },
}
