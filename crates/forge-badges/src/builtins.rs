//! Built-in badge presets

use crate::badge::BadgeSpec;
use crate::catalog::BadgePreset;

const REPO: &str = "https://github.com/{{ github_username }}/{{ project_name }}";

fn license_local() -> BadgeSpec {
    BadgeSpec::new("license", "license", "unlicensed", "blue", "LICENSE")
}

fn license_github() -> BadgeSpec {
    BadgeSpec::new(
        "license",
        "license",
        "unlicensed",
        "blue",
        format!("{REPO}/blob/main/LICENSE"),
    )
}

fn github(label: &str, key: &str, color: &str, path: &str) -> BadgeSpec {
    BadgeSpec::new(label, key, "github", color, format!("{REPO}/{path}"))
}

fn github_stars() -> BadgeSpec {
    github("stars", "github_stars", "yellow", "stargazers")
}

fn github_forks() -> BadgeSpec {
    github("forks", "github_forks", "blue", "network/members")
}

fn github_issues() -> BadgeSpec {
    github("issues", "github_issues", "orange", "issues")
}

fn github_last_commit() -> BadgeSpec {
    github("last commit", "last_commit", "green", "commits")
}

fn github_actions() -> BadgeSpec {
    BadgeSpec::new(
        "build",
        "build_status",
        "passing",
        "brightgreen",
        format!("{REPO}/actions"),
    )
}

fn codecov() -> BadgeSpec {
    BadgeSpec::new(
        "coverage",
        "coverage",
        "codecov",
        "brightgreen",
        "https://codecov.io/gh/{{ github_username }}/{{ project_name }}",
    )
}

const PYPI: &str = "https://pypi.org/project/{{ project_name }}/";

fn pypi_version() -> BadgeSpec {
    BadgeSpec::new("pypi", "version", "latest", "blue", PYPI)
}

fn pypi_downloads() -> BadgeSpec {
    BadgeSpec::new("downloads", "downloads", "pypi", "brightgreen", PYPI)
}

fn python_version() -> BadgeSpec {
    BadgeSpec::new(
        "python",
        "python_version",
        "3.8+",
        "blue",
        "https://www.python.org/downloads/",
    )
}

const NPM: &str = "https://www.npmjs.com/package/{{ project_name }}";

fn npm_version() -> BadgeSpec {
    BadgeSpec::new("npm", "version", "latest", "red", NPM)
}

fn npm_downloads() -> BadgeSpec {
    BadgeSpec::new("downloads", "downloads", "npm", "red", NPM)
}

fn node_version() -> BadgeSpec {
    BadgeSpec::new("node", "node_version", ">=18", "green", "https://nodejs.org/")
}

fn crates_io() -> BadgeSpec {
    BadgeSpec::new(
        "crates.io",
        "version",
        "latest",
        "orange",
        "https://crates.io/crates/{{ project_name }}",
    )
}

fn docs_rs() -> BadgeSpec {
    BadgeSpec::new(
        "docs.rs",
        "docs_status",
        "latest",
        "blue",
        "https://docs.rs/{{ project_name }}",
    )
}

fn rust_version() -> BadgeSpec {
    BadgeSpec::new(
        "rust",
        "rust_version",
        "stable",
        "orange",
        "https://www.rust-lang.org/",
    )
}

pub(crate) fn presets() -> Vec<BadgePreset> {
    vec![
        BadgePreset::new("minimal", vec![license_local()]),
        BadgePreset::new(
            "python_library",
            vec![
                license_github(),
                pypi_version(),
                python_version(),
                pypi_downloads(),
                github_actions(),
                codecov(),
            ],
        ),
        BadgePreset::new(
            "python_cli",
            vec![
                license_github(),
                pypi_version(),
                python_version(),
                github_stars(),
                github_last_commit(),
            ],
        ),
        BadgePreset::new(
            "node_package",
            vec![
                license_github(),
                npm_version(),
                npm_downloads(),
                node_version(),
                github_actions(),
            ],
        ),
        BadgePreset::new(
            "web_app",
            vec![
                license_github(),
                github_stars(),
                github_issues(),
                github_last_commit(),
                github_actions(),
            ],
        ),
        BadgePreset::new(
            "api",
            vec![license_github(), github_actions(), codecov(), github_issues()],
        ),
        BadgePreset::new(
            "github_standard",
            vec![
                license_github(),
                github_stars(),
                github_forks(),
                github_issues(),
                github_last_commit(),
            ],
        ),
        BadgePreset::new(
            "rust_crate",
            vec![
                license_github(),
                crates_io(),
                docs_rs(),
                rust_version(),
                github_actions(),
            ],
        ),
    ]
}
