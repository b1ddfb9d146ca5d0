//! End-to-end generation runs

use forge_badges::BadgeCatalog;
use forge_config::{Configuration, Layers};
use forge_core::{Engine, Error, GenerateOptions};
use forge_license::LicenseCatalog;
use forge_template::TemplateCatalog;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn project() -> Configuration {
    Configuration::new()
        .with("project_name", "Forge")
        .with("project_description", "Compose READMEs.")
        .with("installation_instructions", "cargo install forge")
        .with("usage_instructions", "forge generate")
        .with("code_language", "bash")
        .with("license", "MIT")
}

#[test]
fn test_disabled_section_and_resolved_placeholder() {
    let engine = Engine::with_builtins();
    let config = Configuration::new().with("name", "Forge").with("api", false);

    let doc = engine
        .generate(
            "# {{ name }}\n<!-- IF api -->\n## API\n<!-- ENDIF api -->\n",
            &config,
            &GenerateOptions::default(),
        )
        .unwrap();

    assert_eq!(doc.readme, "# Forge\n");
    assert_eq!(doc.license, None);
}

#[test]
fn test_minimal_template() {
    let engine = Engine::with_builtins();
    let doc = engine
        .generate_named("minimal", &project(), &GenerateOptions::default())
        .unwrap();

    let expected = "\
# Forge

Compose READMEs.

## Installation

```bash
cargo install forge
```

## Usage

```bash
forge generate
```

## License

This project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details.

";
    assert_eq!(doc.readme, expected);
}

#[test]
fn test_standard_template_table_of_contents() {
    let engine = Engine::with_builtins();
    let doc = engine
        .generate_named("standard", &project(), &GenerateOptions::default())
        .unwrap();

    assert!(doc.readme.contains(
        "## Table of Contents\n\n\
         - [Installation](#installation)\n\
         - [Usage](#usage)\n\
         - [Contributing](#contributing)\n\
         - [License](#license)\n"
    ));
    assert!(!doc.readme.contains("## Features"));
    assert!(!doc.readme.contains("<!--"));
}

#[test]
fn test_configured_table_of_contents_wins() {
    let engine = Engine::with_builtins();
    let config = project().with("table_of_contents", "- see below");
    let doc = engine
        .generate_named("standard", &config, &GenerateOptions::default())
        .unwrap();
    assert!(doc.readme.contains("## Table of Contents\n\n- see below\n"));
}

#[test]
fn test_table_of_contents_guards_its_own_section() {
    let engine = Engine::with_builtins();
    let source = "\
<!-- IF table_of_contents -->
## Table of Contents

{{ table_of_contents }}

<!-- ENDIF table_of_contents -->
## Usage
";

    let doc = engine
        .generate(source, &Configuration::new(), &GenerateOptions::default())
        .unwrap();
    assert_eq!(
        doc.readme,
        "## Table of Contents\n\n- [Usage](#usage)\n\n## Usage\n"
    );

    let no_headings = "<!-- IF table_of_contents -->\n{{ table_of_contents }}\n<!-- ENDIF table_of_contents -->\ntext\n";
    let doc = engine
        .generate(no_headings, &Configuration::new(), &GenerateOptions::default())
        .unwrap();
    assert_eq!(doc.readme, "text\n");
}

#[test]
fn test_include_license_splices_and_returns_text() {
    let engine = Engine::with_builtins();
    let config = project().with("author_name", "Jane Doe").with("year", "2024");
    let options = GenerateOptions {
        include_license: true,
        ..Default::default()
    };

    let doc = engine.generate_named("minimal", &config, &options).unwrap();
    let license = doc.license.unwrap();

    assert!(license.contains("Copyright (c) 2024 Jane Doe"));
    assert!(doc.readme.contains("<summary>Full license text</summary>"));
    assert!(doc.readme.contains("Copyright (c) 2024 Jane Doe"));
    assert!(!doc.readme.contains("{{ license_text }}"));
}

#[test]
fn test_license_option_replaces_configured_license() {
    let engine = Engine::with_builtins();
    let config = project().with("fullname", "Jane Doe");
    let options = GenerateOptions::default().with_license("apache");

    let doc = engine.generate_named("minimal", &config, &options).unwrap();
    assert!(doc.readme.contains("licensed under the Apache-2.0 License"));
    assert!(doc.license.unwrap().contains("Apache License"));
}

#[test]
fn test_badges_bound_into_header() {
    let engine = Engine::with_builtins();
    let config = project().with("github_username", "jane");
    let options = GenerateOptions::default().with_badges("minimal");

    let doc = engine.generate_named("minimal", &config, &options).unwrap();
    assert!(doc.readme.starts_with(
        "# Forge\n\n[![license](https://img.shields.io/badge/license-MIT-blue.svg)](LICENSE)\n\nCompose READMEs.\n"
    ));
}

#[test]
fn test_caller_configuration_is_untouched() {
    let engine = Engine::with_builtins();
    let config = project().with("badge_preset", "github_standard");
    let before = config.clone();

    engine
        .generate_named("standard", &config, &GenerateOptions::default().with_license("MIT"))
        .unwrap();

    assert_eq!(config, before);
}

#[rstest]
#[case::template(GenerateOptions::default(), "<!-- IF a -->\n")]
#[case::preset(GenerateOptions::default().with_badges("does-not-exist"), "x")]
#[case::license(GenerateOptions::default().with_license("not-a-spdx-id"), "x")]
fn test_component_failure_aborts_run(#[case] options: GenerateOptions, #[case] source: &str) {
    let engine = Engine::with_builtins();
    let err = engine.generate(source, &project(), &options).unwrap_err();
    match err {
        Error::Template(forge_template::Error::MalformedTemplate { .. })
        | Error::Badges(forge_badges::Error::UnknownPreset { .. })
        | Error::License(forge_license::Error::UnknownLicense { .. }) => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_named_template() {
    let engine = Engine::with_builtins();
    let err = engine
        .generate_named("nope", &project(), &GenerateOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Template not found: nope");
}

#[test]
fn test_injected_catalogs() {
    let mut templates = TemplateCatalog::new();
    templates
        .register(forge_template::NamedTemplate::new(
            "tiny",
            "one line",
            vec![],
            vec![forge_template::Section::new("body", "", "{{ project_name }}!\n")],
        ))
        .unwrap();
    let engine = Engine::new(templates, BadgeCatalog::new(), LicenseCatalog::new());

    let doc = engine
        .generate_named("tiny", &project(), &GenerateOptions::default())
        .unwrap();
    assert_eq!(doc.readme, "Forge!\n");
    assert!(engine.generate_named("standard", &project(), &GenerateOptions::default()).is_err());
}

#[test]
fn test_merged_layers_drive_generation() {
    let engine = Engine::with_builtins();
    let detected = Configuration::new().with("project_name", "detected").with("api", true);
    let user = Configuration::new().with("project_name", "Forge").with("api", false);

    let config = Layers::with_builtin_defaults()
        .detected(detected)
        .user(user)
        .merge();

    let doc = engine
        .generate(
            "# {{ project_name }}\n<!-- IF api -->\n## API\n<!-- ENDIF api -->\n",
            &config,
            &GenerateOptions::default().with_badges("minimal"),
        )
        .unwrap();
    assert_eq!(doc.readme, "# Forge\n");
}
