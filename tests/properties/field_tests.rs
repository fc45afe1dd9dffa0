//! Properties of the name and description checks.

use proptest::prelude::*;

use skillcheck::config::LimitsConfig;
use skillcheck::core::{FieldText, Status};
use skillcheck::quality::frontmatter::{description_record, is_kebab_case, name_record};

proptest! {
    #[test]
    fn kebab_names_pass(name in r"[a-z0-9]{1,10}(-[a-z0-9]{1,10}){0,4}") {
        prop_assert!(is_kebab_case(&name));
        let record = name_record(&FieldText::Text(name.clone()), &LimitsConfig::default());
        prop_assert_eq!(record.status, Status::Pass);
        prop_assert_eq!(record.check, "Name valid");
        prop_assert_eq!(record.detail, name);
    }

    #[test]
    fn names_with_uppercase_or_underscores_fail(
        head in r"[a-z]{1,8}",
        bad in r"[A-Z_ .]",
        tail in r"[a-z]{0,8}",
    ) {
        let name = format!("{head}{bad}{tail}");
        let record = name_record(&FieldText::Text(name), &LimitsConfig::default());
        prop_assert_eq!(record.status, Status::Fail);
        prop_assert_eq!(record.check, "Name format");
    }

    #[test]
    fn misplaced_hyphens_fail(word in r"[a-z]{1,8}") {
        for name in [format!("-{word}"), format!("{word}-"), format!("{word}--{word}")] {
            prop_assert!(!is_kebab_case(&name), "{name} accepted");
        }
    }

    #[test]
    fn long_kebab_names_fail_on_length(groups in 7usize..12) {
        let name = vec!["abcdefghi"; groups].join("-");
        let len = name.len();
        let record = name_record(&FieldText::Text(name), &LimitsConfig::default());
        prop_assert_eq!(record.status, Status::Fail);
        prop_assert_eq!(record.check, "Name length");
        prop_assert_eq!(record.detail, format!("{len} chars (max 64)"));
    }

    #[test]
    fn description_length_classification(len in 1usize..1500) {
        let record = description_record(&FieldText::Text("x".repeat(len)), &LimitsConfig::default());
        let expected = if len < 50 {
            Status::Warn
        } else if len > 1024 {
            Status::Fail
        } else {
            Status::Pass
        };
        prop_assert_eq!(record.status, expected);
        prop_assert_eq!(record.check, "Description length");
        let prefix = format!("{len} chars");
        prop_assert!(record.detail.starts_with(&prefix));
    }

    #[test]
    fn description_counts_characters_not_bytes(len in 50usize..200) {
        let record = description_record(&FieldText::Text("é".repeat(len)), &LimitsConfig::default());
        prop_assert_eq!(record.status, Status::Pass);
        prop_assert_eq!(record.detail, format!("{len} chars"));
    }
}
