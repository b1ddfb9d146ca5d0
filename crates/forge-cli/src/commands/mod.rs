//! Command implementations for forge-cli

pub mod generate;
pub mod license;
pub mod list;

pub use generate::run_generate;
pub use license::run_license;
pub use list::{run_badges, run_licenses, run_sections, run_templates};
