//! License generation for readme-forge.
//!
//! License bodies are templates with exactly two placeholders, `{{ year }}`
//! and `{{ fullname }}`. Unlike a README, a rendered license must be
//! complete: any placeholder left after substitution is an error.

pub mod catalog;
pub mod error;
pub mod license;

mod builtins;

pub use catalog::LicenseCatalog;
pub use error::{Error, Result};
pub use license::{DEFAULT_HOLDER, License, current_year};
