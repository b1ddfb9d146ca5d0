//! Layered configuration store for readme-forge.
//!
//! A [`Configuration`] is a flat, case-sensitive map of keys to
//! [`ConfigValue`]s. It is built once per run by merging four layers
//! (defaults, persisted file, detected metadata, explicit user input) and is
//! read-only afterwards.

pub mod configuration;
pub mod error;
pub mod layers;
pub mod store;
pub mod value;

pub use configuration::Configuration;
pub use error::{Error, Result};
pub use layers::{Layers, merge};
pub use store::{ConfigFormat, ConfigStore, DEFAULT_CONFIG_FILE};
pub use value::ConfigValue;
