//! Filesystem helpers for readme-forge
//!
//! The only filesystem boundary of the generation engine is the configuration
//! file. This crate provides scoped reads and atomic writes for it.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, read_text_optional, write_atomic, write_text};
