use forge_config::Configuration;
use forge_template::{placeholders, substitute, unresolved};
use proptest::prelude::*;

fn config_from(pairs: &[(String, String)]) -> Configuration {
    pairs
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn text_with_placeholders() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        "[a-z .]{0,8}",
        "[a-z_]{1,8}".prop_map(|k| format!("{{{{ {} }}}}", k)),
    ];
    prop::collection::vec(segment, 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_substitution_is_idempotent_for_plain_values(
        pairs in prop::collection::vec(("[a-z_]{1,8}", "[A-Za-z0-9 .,!-]{0,16}"), 0..6),
        text in text_with_placeholders(),
    ) {
        // Values without braces cannot introduce new placeholders.
        let config = config_from(&pairs);
        let once = substitute(&text, &config);
        let twice = substitute(&once, &config);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_text_without_placeholders_is_unchanged(text in "[^{}]*") {
        let config = Configuration::new().with("a", "x");
        prop_assert_eq!(substitute(&text, &config), text);
    }

    #[test]
    fn test_fully_configured_text_has_nothing_unresolved(
        keys in prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..5),
    ) {
        let text: String = keys.iter().map(|k| format!("{{{{ {} }}}}\n", k)).collect();
        let config: Configuration = keys.iter().map(|k| (k.clone(), "v")).collect();

        prop_assert!(unresolved(&text, &config).is_empty());
        prop_assert!(placeholders(&substitute(&text, &config)).is_empty());
    }
}

#[test]
fn test_missing_keys_survive_for_a_later_pass() {
    let first = Configuration::new().with("name", "Forge");
    let second = Configuration::new().with("year", "2024");

    let partial = substitute("{{ name }} {{ year }}", &first);
    assert_eq!(partial, "Forge {{ year }}");
    assert_eq!(substitute(&partial, &second), "Forge 2024");
}
