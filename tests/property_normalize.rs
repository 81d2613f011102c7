use proptest::prelude::*;

use vocab_drill::bank::normalize;

proptest! {
    #[test]
    fn pt_normalize_is_idempotent(raw in ".*") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn pt_normalize_strips_spaces_and_semicolons(raw in ".*") {
        let normalized = normalize(&raw);
        prop_assert!(!normalized.chars().any(|c| c.is_whitespace() || c == ';'));
    }

    #[test]
    fn pt_normalize_is_case_insensitive(raw in "[a-zA-Z ;]{0,32}") {
        prop_assert_eq!(
            normalize(&raw.to_uppercase()),
            normalize(&raw.to_lowercase())
        );
    }

    #[test]
    fn pt_whitespace_layout_never_matters(word in "[a-z]{1,12}", pad in "[ ;]{0,6}") {
        let decorated = format!("{pad}{word}{pad}");
        prop_assert_eq!(normalize(&decorated), normalize(&word));
    }
}

#[test]
fn decorated_be_collapses_to_plain_be() {
    assert_eq!(normalize("Be ; "), normalize("be"));
}
