//! Badge generation for readme-forge.
//!
//! A preset is a named, ordered list of [`BadgeSpec`]s. Rendering a preset
//! against a configuration produces static shields.io badges in declaration
//! order:
//!
//! ```text
//! https://img.shields.io/badge/{label}-{message}-{color}.svg
//! ```

pub mod badge;
pub mod catalog;
pub mod error;

mod builtins;

pub use badge::{Badge, BadgeSpec, SHIELDS_BASE_URL, escape_segment};
pub use catalog::{BadgeCatalog, BadgePreset, DEFAULT_SEPARATOR};
pub use error::{Error, Result};
