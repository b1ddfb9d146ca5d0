//! Template composition for readme-forge.
//!
//! A template is plain text with two kinds of embedded syntax:
//!
//! ```text
//! <!-- IF key -->
//! kept only when `key` is truthy
//! <!-- ENDIF key -->
//!
//! {{ key }}   replaced by the value of `key`
//! ```
//!
//! Resolution happens in two stages. [`resolve`] evaluates the conditional
//! sections and yields a template made only of literal text, then
//! [`substitute`] replaces placeholders. Guards that are missing from the
//! configuration are false, and placeholders that are missing are left as
//! they are, so older templates keep working when new keys appear.

pub mod catalog;
pub mod error;
pub mod lexer;
pub mod resolver;
pub mod substitute;
pub mod template;
pub mod toc;

mod builtins;

pub use catalog::{NamedTemplate, Section, TemplateCatalog};
pub use error::{Error, MarkerProblem, Result};
pub use resolver::{resolve, resolve_str};
pub use substitute::{placeholders, substitute, unresolved};
pub use template::{Block, Template};
pub use toc::table_of_contents;
