//! Composition pipeline for readme-forge
//!
//! Ties the component crates together:
//!
//! ```text
//!                  forge-cli
//!                      |
//!                  forge-core
//!                      |
//!     +------------+---+---------+-------------+
//!     |            |             |             |
//! forge-config forge-template forge-badges forge-license
//! ```
//!
//! A run parses the template, renders badges and the license into a private
//! copy of the configuration, resolves conditional sections, and finally
//! substitutes placeholders. Any component error aborts the run and no
//! partial document is returned.
//!
//! # Example
//!
//! ```
//! use forge_config::Configuration;
//! use forge_core::{Engine, GenerateOptions};
//!
//! let engine = Engine::with_builtins();
//! let config = Configuration::new().with("name", "Forge").with("api", false);
//! let doc = engine
//!     .generate(
//!         "# {{ name }}\n<!-- IF api -->\n## API\n<!-- ENDIF api -->\n",
//!         &config,
//!         &GenerateOptions::default(),
//!     )
//!     .unwrap();
//! assert_eq!(doc.readme, "# Forge\n");
//! ```

pub mod error;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Document, Engine, GenerateOptions};
