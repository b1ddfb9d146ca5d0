//! Error types for forge-license

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("License not found: '{id}'")]
    UnknownLicense { id: String },

    #[error("License already registered: {id}")]
    DuplicateLicense { id: String },

    #[error("License {id} still has unresolved placeholders: {}", tokens.join(", "))]
    IncompleteLicenseSubstitution { id: String, tokens: Vec<String> },
}
