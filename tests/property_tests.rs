// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for lookup invariants

use http_status_meaning::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn numeric_and_string_codes_agree(code in 0u16..1000) {
        prop_assert_eq!(meaning(code, None), meaning(code.to_string(), None));
        prop_assert_eq!(category(code, None), category(code.to_string(), None));
    }

    #[test]
    fn category_is_a_step_function(code in any::<u16>()) {
        let expected = match code {
            100..=199 => "Informational",
            200..=299 => "Success",
            300..=399 => "Redirection",
            400..=499 => "Client Error",
            500..=599 => "Server Error",
            _ => "Unknown",
        };
        prop_assert_eq!(category(code, None), expected);
    }

    #[test]
    fn matched_text_categorizes_like_its_code(text in "[a-zA-Z ]{0,40}") {
        if let Some(code) = match_description(&text) {
            prop_assert_eq!(category(text.as_str(), None), category(code, None));
            prop_assert_eq!(meaning(text.as_str(), None), meaning(code, None));
        } else {
            prop_assert_eq!(category(text.as_str(), None), "Unknown");
        }
    }

    #[test]
    fn matching_is_idempotent(text in ".{0,60}") {
        prop_assert_eq!(match_description(&text), match_description(&text));
    }

    #[test]
    fn matching_ignores_case(text in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(match_description(&text), match_description(&text.to_uppercase()));
    }

    #[test]
    fn negated_text_never_matches(prefix in "[a-z ]{0,10}", rest in "[a-z ]{0,20}") {
        let text = format!("{}not a {}", prefix, rest);
        prop_assert_eq!(match_description(&text), None);
    }

    #[test]
    fn unknown_language_falls_back_to_english(code in 100u16..600, tag in "[a-z]{3}") {
        prop_assert_eq!(meaning(code, Some(tag.as_str())), meaning(code, None));
        prop_assert_eq!(category(code, Some(tag.as_str())), category(code, None));
    }
}
