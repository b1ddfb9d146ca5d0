//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// readme-forge - Compose README and LICENSE files from templates
#[derive(Parser, Debug)]
#[command(name = "readme-forge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a README from a template and configuration
    ///
    /// Examples:
    ///   readme-forge generate                          # standard template
    ///   readme-forge generate -t minimal --stdout      # print instead of writing
    ///   readme-forge generate --set project_name=Forge --enable api
    Generate(GenerateArgs),

    /// List available templates
    Templates,

    /// List the sections of a template
    Sections {
        /// Template name (defaults to "standard")
        name: Option<String>,
    },

    /// List available licenses
    Licenses,

    /// List available badge presets
    Badges,

    /// Write a license file
    ///
    /// Examples:
    ///   readme-forge license MIT -a "Jane Doe"
    ///   readme-forge license apache -y 2020 -o COPYING
    License {
        /// License id or alias (use 'readme-forge licenses' to see options)
        id: String,

        /// Copyright holder
        #[arg(
            short,
            long,
            env = "README_FORGE_AUTHOR",
            default_value = forge_license::DEFAULT_HOLDER
        )]
        author: String,

        /// Copyright year (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "LICENSE")]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Built-in template name
    #[arg(short, long, conflicts_with = "template_file")]
    pub template: Option<String>,

    /// Template source file in marker syntax
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Configuration file (json, toml or yaml); readme-forge.json if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "README.md")]
    pub output: PathBuf,

    /// Set a text value, as key=value (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Turn a section guard on (repeatable)
    #[arg(long, value_name = "KEY")]
    pub enable: Vec<String>,

    /// Turn a section guard off (repeatable)
    #[arg(long, value_name = "KEY")]
    pub disable: Vec<String>,

    /// Badge preset (use 'readme-forge badges' to see options)
    #[arg(long, value_name = "PRESET")]
    pub badges: Option<String>,

    /// Also write a LICENSE file next to the output
    #[arg(long)]
    pub license_file: bool,

    /// Save the given values to the configuration file
    #[arg(long)]
    pub save_config: bool,

    /// Print the README instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
