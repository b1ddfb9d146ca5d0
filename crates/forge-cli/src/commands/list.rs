//! List commands for templates, sections, licenses and badge presets

use colored::Colorize;
use forge_core::Engine;

use crate::error::Result;

/// Run the templates command
pub fn run_templates(engine: &Engine) -> Result<()> {
    println!("{}", "Available Templates".bold());
    println!();

    for (name, description) in engine.templates().describe() {
        println!("  {:<16} {}", name.green(), description);
    }

    println!();
    println!(
        "{} {} templates available. Use {} to pick one.",
        "Total:".dimmed(),
        engine.templates().len(),
        "readme-forge generate -t <name>".cyan()
    );
    Ok(())
}

/// Run the sections command
pub fn run_sections(engine: &Engine, name: Option<&str>) -> Result<()> {
    let name = name.unwrap_or("standard");
    let template = engine.templates().get(name)?;

    println!("{} {}", "Sections of".bold(), template.name.green().bold());
    println!();
    for (index, section) in template.sections.iter().enumerate() {
        let title = if section.title.is_empty() {
            "(header)".dimmed().to_string()
        } else {
            section.title.clone()
        };
        println!("  {:>2}. {:<16} {}", index + 1, section.name.cyan(), title);
    }
    Ok(())
}

/// Run the licenses command
pub fn run_licenses(engine: &Engine) -> Result<()> {
    println!("{}", "Available Licenses".bold());
    println!();

    for license in engine.licenses().iter() {
        println!("  {:<14} {}", license.id.green(), license.title);
        println!("  {:<14} {}", "", license.description.dimmed());
    }

    println!();
    println!(
        "{} {} licenses available. Use {} to write one.",
        "Total:".dimmed(),
        engine.licenses().len(),
        "readme-forge license <id>".cyan()
    );
    Ok(())
}

/// Run the badges command
pub fn run_badges(engine: &Engine) -> Result<()> {
    println!("{}", "Available Badge Presets".bold());
    println!();

    for name in engine.badges().list_presets() {
        let labels: Vec<String> = engine
            .badges()
            .get(&name)
            .map(|preset| preset.badges.iter().map(|b| b.label.clone()).collect())
            .unwrap_or_default();
        println!("  {:<16} {}", name.green(), labels.join(", ").dimmed());
    }

    println!();
    println!(
        "{} {} presets available. Use {} to pick one.",
        "Total:".dimmed(),
        engine.badges().len(),
        "readme-forge generate --badges <preset>".cyan()
    );
    Ok(())
}
