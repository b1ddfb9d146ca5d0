//! Rendering built-in licenses

use forge_license::{Error, License, LicenseCatalog};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_mit_is_complete() {
    let catalog = LicenseCatalog::with_builtins();
    let text = catalog.render("MIT", "Jane Doe", "2024").unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("2024"));
    assert!(!text.contains("{{"));
    assert!(!text.contains("fullname"));
    assert!(!text.contains("year }}"));
}

#[rstest]
#[case("MIT", "Copyright (c) 2031 Jane Doe")]
#[case("Apache-2.0", "Copyright 2031 Jane Doe")]
#[case("GPL-3.0", "Copyright 2031 Jane Doe")]
#[case("BSD-3-Clause", "Copyright (c) 2031, Jane Doe")]
#[case("ISC", "Copyright (c) 2031, Jane Doe")]
#[case("MPL-2.0", "Copyright 2031 Jane Doe")]
fn test_builtin_bodies_name_the_author(#[case] id: &str, #[case] line: &str) {
    let catalog = LicenseCatalog::with_builtins();
    let text = catalog.render(id, "Jane Doe", "2031").unwrap();
    assert!(text.contains(line), "{id} missing copyright line");
}

#[test]
fn test_unlicense_has_no_author() {
    let catalog = LicenseCatalog::with_builtins();
    let text = catalog.render("unlicense", "Jane Doe", "2024").unwrap();
    assert!(text.contains("public domain"));
    assert!(!text.contains("Jane Doe"));
}

#[test]
fn test_unknown_license() {
    let catalog = LicenseCatalog::with_builtins();
    match catalog.render("not-a-spdx-id", "Jane", "2024") {
        Err(Error::UnknownLicense { id }) => assert_eq!(id, "not-a-spdx-id"),
        other => panic!("expected UnknownLicense, got {other:?}"),
    }
}

#[test]
fn test_custom_license_with_extra_placeholder_fails() {
    let mut catalog = LicenseCatalog::new();
    catalog
        .register(License::new(
            "Custom-1.0",
            "Custom",
            "",
            "Copyright {{ year }} {{ fullname }} <{{ email }}>",
        ))
        .unwrap();

    let err = catalog.render("custom-1.0", "Jane", "2024").unwrap_err();
    assert!(matches!(
        err,
        Error::IncompleteLicenseSubstitution { ref tokens, .. } if tokens == &["email"]
    ));
    assert_eq!(
        err.to_string(),
        "License Custom-1.0 still has unresolved placeholders: email"
    );
}

#[test]
fn test_render_current_year() {
    let catalog = LicenseCatalog::with_builtins();
    let text = catalog.render_current_year("ISC", "Jane").unwrap();
    assert!(text.contains(&forge_license::current_year()));
}
