//! The license command

use std::path::Path;

use colored::Colorize;
use forge_license::{LicenseCatalog, current_year};

use crate::error::Result;

/// Render a license to `output`, relative to `cwd`.
pub fn run_license(
    catalog: &LicenseCatalog,
    cwd: &Path,
    id: &str,
    author: &str,
    year: Option<&str>,
    output: &Path,
) -> Result<()> {
    let year = year.map_or_else(current_year, str::to_string);
    let text = catalog.render(id, author, &year)?;

    let path = cwd.join(output);
    forge_fs::write_text(&path, &text)?;
    println!(
        "{} Wrote {} ({})",
        "OK".green().bold(),
        path.display(),
        catalog.badge_name(id).cyan()
    );
    Ok(())
}
