//! Property tests for config validation.

use proptest::prelude::*;

use ado::config::{validate_content, Severity};

fn config_like() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just("version: 1".to_string()),
        Just("version: 2".to_string()),
        Just("version: 0".to_string()),
        Just("version: \"1\"".to_string()),
        Just("# comment".to_string()),
        Just(String::new()),
        Just("- item".to_string()),
        Just("nested:\n  version: 1".to_string()),
        Just("broken: [".to_string()),
        "[a-z_]{1,10}: [a-z0-9]{0,6}",
    ];
    proptest::collection::vec(line, 0..8).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary bytes never panic and always give a consistent result.
    #[test]
    fn property_validate_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let result = validate_content("fuzz.yaml", &data);
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    /// PROPERTY: Validation is deterministic.
    #[test]
    fn property_validate_is_idempotent(content in config_like()) {
        let first = validate_content("config.yaml", content.as_bytes());
        let second = validate_content("config.yaml", content.as_bytes());
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: valid == errors.is_empty(), and issues sit in the right list.
    #[test]
    fn property_severity_matches_list(content in config_like()) {
        let result = validate_content("config.yaml", content.as_bytes());

        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
        prop_assert!(result.errors().iter().all(|e| e.severity == Severity::Error));
        prop_assert!(result.warnings().iter().all(|w| w.severity == Severity::Warning));
        prop_assert!(result.errors().iter().chain(result.warnings()).all(|i| i.line != Some(0)));
    }

    /// PROPERTY: Strict promotion is idempotent and keeps every issue.
    #[test]
    fn property_promotion_is_idempotent(content in config_like()) {
        let result = validate_content("config.yaml", content.as_bytes());
        let total = result.errors().len() + result.warnings().len();
        let had_warnings = result.has_warnings();
        let was_valid = result.is_valid();

        let once = result.promote_warnings();
        let twice = once.clone().promote_warnings();

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.warnings().is_empty());
        prop_assert_eq!(once.is_valid(), once.errors().is_empty());
        prop_assert_eq!(once.errors().len(), total);
        prop_assert_eq!(once.is_valid(), was_valid && !had_warnings);
    }
}
