//! Integration tests for layered configuration merge.

use forge_config::{ConfigValue, Configuration, Layers, merge};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_precedence_across_all_four_layers() {
    let defaults = Configuration::new().with("a", "1");
    let persisted = Configuration::new().with("a", "2").with("b", "1");
    let detected = Configuration::new().with("b", "2").with("c", "1");
    let user = Configuration::new().with("c", "2");

    let merged = merge(Some(&defaults), Some(&persisted), Some(&detected), Some(&user));

    let expected = Configuration::new().with("a", "2").with("b", "2").with("c", "2");
    assert_eq!(merged, expected);
}

#[rstest]
#[case::defaults_only(Some("d"), None, None, None, Some("d"))]
#[case::persisted_beats_defaults(Some("d"), Some("p"), None, None, Some("p"))]
#[case::detected_beats_persisted(Some("d"), Some("p"), Some("x"), None, Some("x"))]
#[case::user_beats_everything(Some("d"), Some("p"), Some("x"), Some("u"), Some("u"))]
#[case::gaps_are_skipped(None, None, Some("x"), None, Some("x"))]
#[case::nothing_anywhere(None, None, None, None, None)]
fn test_single_key_precedence(
    #[case] defaults: Option<&str>,
    #[case] persisted: Option<&str>,
    #[case] detected: Option<&str>,
    #[case] user: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let layer = |v: Option<&str>| v.map(|v| Configuration::new().with("key", v));

    let merged = Layers {
        defaults: layer(defaults),
        persisted: layer(persisted),
        detected: layer(detected),
        user: layer(user),
    }
    .merge();

    assert_eq!(merged.get_str("key"), expected);
}

#[test]
fn test_explicit_blank_user_answer_clears_detected_value() {
    let detected = Configuration::new().with("project_description", "from git");
    let user = Configuration::new().with("project_description", "");

    let merged = merge(None, None, Some(&detected), Some(&user));

    assert_eq!(merged.get_str("project_description"), Some(""));
}

#[test]
fn test_absent_user_key_keeps_detected_value() {
    let detected = Configuration::new().with("project_name", "forge");
    let user = Configuration::new().with("author_name", "Jane Doe");

    let merged = merge(None, None, Some(&detected), Some(&user));

    assert_eq!(merged.get_str("project_name"), Some("forge"));
    assert_eq!(merged.get_str("author_name"), Some("Jane Doe"));
}

#[test]
fn test_user_flag_replaces_detected_text() {
    let detected = Configuration::new().with("badges", "![x](y)");
    let user = Configuration::new().with("badges", false);

    let merged = merge(None, None, Some(&detected), Some(&user));

    assert_eq!(merged.get("badges"), Some(&ConfigValue::Flag(false)));
    assert!(!merged.is_enabled("badges"));
}

#[test]
fn test_merge_does_not_touch_inputs() {
    let defaults = Configuration::defaults();
    let user = Configuration::new().with("license", "ISC");

    let merged = merge(Some(&defaults), None, None, Some(&user));

    assert_eq!(merged.get_str("license"), Some("ISC"));
    assert_eq!(defaults.get_str("license"), Some("MIT"));
}
