//! readme-forge CLI
//!
//! Non-interactive front end for composing README and LICENSE files.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use forge_core::Engine;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} README composer", "readme-forge".green().bold());
            println!();
            println!("Run {} for available commands.", "readme-forge --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let engine = Engine::with_builtins();
    match cmd {
        Commands::Generate(args) => commands::run_generate(&engine, &current_dir()?, args),
        Commands::Templates => commands::run_templates(&engine),
        Commands::Sections { name } => commands::run_sections(&engine, name.as_deref()),
        Commands::Licenses => commands::run_licenses(&engine),
        Commands::Badges => commands::run_badges(&engine),
        Commands::License {
            id,
            author,
            year,
            output,
        } => commands::run_license(
            engine.licenses(),
            &current_dir()?,
            &id,
            &author,
            year.as_deref(),
            &output,
        ),
    }
}

fn current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().map_err(|e| CliError::from(forge_fs::Error::io(".", e)))
}
