//! Built-in README sections and templates

use crate::catalog::{NamedTemplate, Section};

const HEADER_SRC: &str = "\
# {{ project_name }}

<!-- IF badges -->
{{ badges }}

<!-- ENDIF badges -->
{{ project_description }}

";

const TOC_SRC: &str = "\
## Table of Contents

{{ table_of_contents }}

";

const FEATURES_SRC: &str = "\
<!-- IF features -->
## Features

{{ features }}

<!-- ENDIF features -->
";

const DEMO_SRC: &str = "\
<!-- IF demo -->
## Demo

<!-- IF demo_gif -->
![Demo]({{ demo_gif }})

<!-- ENDIF demo_gif -->
<!-- IF demo_url -->
[Live Demo]({{ demo_url }})

<!-- ENDIF demo_url -->
<!-- ENDIF demo -->
";

const PREREQUISITES_SRC: &str = "\
<!-- IF prerequisites -->
## Prerequisites

Before you begin, ensure you have the following installed:

{{ prerequisites }}

<!-- ENDIF prerequisites -->
";

const INSTALLATION_SRC: &str = "\
## Installation

```bash
{{ installation_instructions }}
```

";

const USAGE_SRC: &str = "\
## Usage

```{{ code_language }}
{{ usage_instructions }}
```

<!-- IF usage_examples -->
### Examples

{{ usage_examples }}

<!-- ENDIF usage_examples -->
";

const API_REFERENCE_SRC: &str = "\
<!-- IF api -->
## API Reference

<!-- IF api_docs_url -->
For detailed API documentation, visit [API Docs]({{ api_docs_url }}).

<!-- ENDIF api_docs_url -->
<!-- IF api_summary -->
{{ api_summary }}

<!-- ENDIF api_summary -->
<!-- ENDIF api -->
";

const CONFIGURATION_SRC: &str = "\
<!-- IF config_file -->
## Configuration

Create a `{{ config_file }}` file in your project root:

<!-- IF config_example -->
```{{ config_format }}
{{ config_example }}
```

<!-- ENDIF config_example -->
<!-- ENDIF config_file -->
";

const TESTING_SRC: &str = "\
<!-- IF test_command -->
## Testing

```bash
{{ test_command }}
```

<!-- IF coverage_command -->
### Coverage

```bash
{{ coverage_command }}
```

<!-- ENDIF coverage_command -->
<!-- ENDIF test_command -->
";

const ROADMAP_SRC: &str = "\
<!-- IF roadmap -->
## Roadmap

{{ roadmap }}

See the [open issues](https://github.com/{{ github_username }}/{{ project_name }}/issues) for a full list of proposed features and known issues.

<!-- ENDIF roadmap -->
";

const CONTRIBUTING_SRC: &str = "\
## Contributing

Contributions are welcome! Here's how you can help:

1. Fork the repository
2. Create a feature branch (`git checkout -b feature/amazing-feature`)
3. Commit your changes (`git commit -m 'Add amazing feature'`)
4. Push to the branch (`git push origin feature/amazing-feature`)
5. Open a Pull Request

<!-- IF contributing_file -->
Please read [CONTRIBUTING.md]({{ contributing_file }}) for details on our code of conduct and the process for submitting pull requests.

<!-- ENDIF contributing_file -->
";

const LICENSE_SRC: &str = "\
## License

<!-- IF license -->
This project is licensed under the {{ license }} License - see the [LICENSE](LICENSE) file for details.

<!-- IF license_text -->
<details>
<summary>Full license text</summary>

```text
{{ license_text }}
```

</details>

<!-- ENDIF license_text -->
<!-- ENDIF license -->
";

const CONTACT_SRC: &str = "\
<!-- IF author_name -->
## Contact

{{ author_name }}<!-- IF author_email --> - {{ author_email }}<!-- ENDIF author_email -->

<!-- IF twitter_handle -->
Twitter: [@{{ twitter_handle }}](https://twitter.com/{{ twitter_handle }})

<!-- ENDIF twitter_handle -->
Project Link: [https://github.com/{{ github_username }}/{{ project_name }}](https://github.com/{{ github_username }}/{{ project_name }})

<!-- ENDIF author_name -->
";

const ACKNOWLEDGMENTS_SRC: &str = "\
<!-- IF acknowledgments -->
## Acknowledgments

{{ acknowledgments }}

<!-- ENDIF acknowledgments -->
";

/// A built-in section, referenced by constant so a misspelled name fails to
/// compile.
#[derive(Clone, Copy)]
struct Part {
    name: &'static str,
    title: &'static str,
    content: &'static str,
}

impl Part {
    fn section(&self) -> Section {
        Section::new(self.name, self.title, self.content)
    }
}

const HEADER: Part = Part {
    name: "header",
    title: "",
    content: HEADER_SRC,
};
const TOC: Part = Part {
    name: "toc",
    title: "Table of Contents",
    content: TOC_SRC,
};
const FEATURES: Part = Part {
    name: "features",
    title: "Features",
    content: FEATURES_SRC,
};
const DEMO: Part = Part {
    name: "demo",
    title: "Demo",
    content: DEMO_SRC,
};
const PREREQUISITES: Part = Part {
    name: "prerequisites",
    title: "Prerequisites",
    content: PREREQUISITES_SRC,
};
const INSTALLATION: Part = Part {
    name: "installation",
    title: "Installation",
    content: INSTALLATION_SRC,
};
const USAGE: Part = Part {
    name: "usage",
    title: "Usage",
    content: USAGE_SRC,
};
const API_REFERENCE: Part = Part {
    name: "api_reference",
    title: "API Reference",
    content: API_REFERENCE_SRC,
};
const CONFIGURATION: Part = Part {
    name: "configuration",
    title: "Configuration",
    content: CONFIGURATION_SRC,
};
const TESTING: Part = Part {
    name: "testing",
    title: "Testing",
    content: TESTING_SRC,
};
const ROADMAP: Part = Part {
    name: "roadmap",
    title: "Roadmap",
    content: ROADMAP_SRC,
};
const CONTRIBUTING: Part = Part {
    name: "contributing",
    title: "Contributing",
    content: CONTRIBUTING_SRC,
};
const LICENSE: Part = Part {
    name: "license",
    title: "License",
    content: LICENSE_SRC,
};
const CONTACT: Part = Part {
    name: "contact",
    title: "Contact",
    content: CONTACT_SRC,
};
const ACKNOWLEDGMENTS: Part = Part {
    name: "acknowledgments",
    title: "Acknowledgments",
    content: ACKNOWLEDGMENTS_SRC,
};

/// Every built-in section.
#[cfg(test)]
const SECTIONS: &[Part] = &[
    HEADER,
    TOC,
    FEATURES,
    DEMO,
    PREREQUISITES,
    INSTALLATION,
    USAGE,
    API_REFERENCE,
    CONFIGURATION,
    TESTING,
    ROADMAP,
    CONTRIBUTING,
    LICENSE,
    CONTACT,
    ACKNOWLEDGMENTS,
];

fn template(
    name: &str,
    description: &str,
    project_types: &[&str],
    parts: &[Part],
) -> NamedTemplate {
    NamedTemplate::new(
        name,
        description,
        project_types.iter().map(|s| s.to_string()).collect(),
        parts.iter().map(Part::section).collect(),
    )
}

pub(crate) fn templates() -> Vec<NamedTemplate> {
    vec![
        template(
            "standard",
            "A standard README template suitable for most projects",
            &["standard", "default", "general"],
            &[
                HEADER, TOC, FEATURES, PREREQUISITES, INSTALLATION, USAGE, ROADMAP,
                CONTRIBUTING, LICENSE, CONTACT, ACKNOWLEDGMENTS,
            ],
        ),
        template(
            "minimal",
            "A minimal README template",
            &["minimal", "simple", "basic"],
            &[HEADER, INSTALLATION, USAGE, LICENSE],
        ),
        template(
            "python_library",
            "Template for Python libraries and packages",
            &["library", "package", "module"],
            &[
                HEADER, TOC, FEATURES, PREREQUISITES, INSTALLATION, USAGE, API_REFERENCE,
                CONFIGURATION, TESTING, ROADMAP, CONTRIBUTING, LICENSE, CONTACT,
                ACKNOWLEDGMENTS,
            ],
        ),
        template(
            "cli_tool",
            "Template for command-line interface tools",
            &["cli", "command-line", "terminal"],
            &[
                HEADER, TOC, FEATURES, DEMO, PREREQUISITES, INSTALLATION, USAGE, CONFIGURATION,
                ROADMAP, CONTRIBUTING, LICENSE, CONTACT,
            ],
        ),
        template(
            "web_app",
            "Template for web applications",
            &["web", "webapp", "website", "frontend", "backend"],
            &[
                HEADER, TOC, FEATURES, DEMO, PREREQUISITES, INSTALLATION, USAGE, CONFIGURATION,
                API_REFERENCE, TESTING, ROADMAP, CONTRIBUTING, LICENSE, CONTACT,
                ACKNOWLEDGMENTS,
            ],
        ),
        template(
            "api",
            "Template for REST APIs and backend services",
            &["api", "rest", "backend", "service", "microservice"],
            &[
                HEADER, TOC, FEATURES, PREREQUISITES, INSTALLATION, USAGE, API_REFERENCE,
                CONFIGURATION, TESTING, ROADMAP, CONTRIBUTING, LICENSE, CONTACT,
            ],
        ),
    ]
}
