//! The generate command

use std::path::{Path, PathBuf};

use colored::Colorize;
use forge_config::{ConfigStore, Configuration, DEFAULT_CONFIG_FILE, Layers};
use forge_core::{Engine, GenerateOptions};

use crate::cli::GenerateArgs;
use crate::error::Result;

/// Run the generate command relative to `cwd`.
pub fn run_generate(engine: &Engine, cwd: &Path, args: GenerateArgs) -> Result<()> {
    let store = ConfigStore::new();
    let (config_path, persisted) = match &args.config {
        Some(path) => {
            let path = cwd.join(path);
            let config = store.load(&path)?;
            (path, Some(config))
        }
        None => {
            let path = cwd.join(DEFAULT_CONFIG_FILE);
            let config = store.load_optional(&path)?;
            (path, config)
        }
    };

    let user = user_layer(&args);
    let config = Layers::with_builtin_defaults()
        .persisted(persisted.clone())
        .detected(Configuration::new())
        .user(user.clone())
        .merge();

    let options = GenerateOptions {
        include_license: args.license_file,
        badge_preset: args.badges.clone(),
        license: None,
    };

    let document = match &args.template_file {
        Some(path) => {
            let source = forge_fs::read_text(cwd.join(path))?;
            engine.generate(&source, &config, &options)?
        }
        None => {
            let name = config.first_str(&["template"]).unwrap_or("standard");
            tracing::debug!(template = %name, "Using catalog template");
            engine.generate_named(name, &config, &options)?
        }
    };

    if args.stdout {
        print!("{}", document.readme);
    } else {
        let output = cwd.join(&args.output);
        forge_fs::write_text(&output, &document.readme)?;
        println!("{} Wrote {}", "OK".green().bold(), output.display());

        if let Some(license) = &document.license {
            let license_path = sibling(&output, "LICENSE");
            forge_fs::write_text(&license_path, license)?;
            println!("{} Wrote {}", "OK".green().bold(), license_path.display());
        }
    }

    if args.save_config {
        let mut saved = persisted.unwrap_or_default();
        saved.overlay(&user);
        store.save(&saved, &config_path)?;
        // Keep stdout clean when the README itself goes there.
        eprintln!("{} Saved {}", "OK".green().bold(), config_path.display());
    }

    Ok(())
}

/// Values given on the command line.
fn user_layer(args: &GenerateArgs) -> Configuration {
    let mut user = Configuration::new();
    if let Some(template) = &args.template {
        user.insert("template", template.as_str());
    }
    if let Some(preset) = &args.badges {
        user.insert("badge_preset", preset.as_str());
    }
    for (key, value) in &args.set {
        user.insert(key.as_str(), value.as_str());
    }
    for key in &args.enable {
        user.insert(key.as_str(), true);
    }
    for key in &args.disable {
        user.insert(key.as_str(), false);
    }
    user
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
