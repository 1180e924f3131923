// SPDX-License-Identifier: PMPL-1.0-or-later

//! Description matcher behaviour over the whole catalog

use http_status_meaning::catalog::{self, STATUS_CODES};
use http_status_meaning::match_description;
use http_status_meaning::matcher::rules::NEGATIVE_PHRASES;

/// Full meanings that resolve elsewhere because an earlier stage claims them:
/// a keyword inside the description ("processing", "found") or a negative
/// phrase ("is not ", "invalid ", "not a ").
const MEANINGS_CLAIMED_EARLIER: &[(u16, Option<u16>)] = &[
    (202, Some(102)),
    (303, Some(302)),
    (405, None),
    (421, None),
    (425, Some(102)),
    (502, None),
    (508, Some(102)),
];

#[test]
fn test_every_short_title_matches_its_code() {
    for &(code, meaning) in STATUS_CODES {
        let title = catalog::short_title(meaning);
        assert_eq!(match_description(title), Some(code), "title {:?}", title);
        assert_eq!(
            match_description(&title.to_uppercase()),
            Some(code),
            "uppercased title {:?}",
            title
        );
    }
}

#[test]
fn test_full_meanings_match_their_code() {
    for &(code, meaning) in STATUS_CODES {
        let expected = MEANINGS_CLAIMED_EARLIER
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(Some(code), |&(_, resolved)| resolved);
        assert_eq!(match_description(meaning), expected, "meaning of {}", code);
    }
}

#[test]
fn test_negated_titles_never_match() {
    for phrase in NEGATIVE_PHRASES {
        for &(_, meaning) in STATUS_CODES {
            let text = format!("{}{}", phrase, catalog::short_title(meaning));
            assert_eq!(match_description(&text), None, "{:?} should be vetoed", text);
        }
    }
}

#[test]
fn test_not_found_carve_out() {
    assert_eq!(match_description("not found"), Some(404));
    assert_eq!(match_description("Resource Not Found"), Some(404));
    assert_eq!(match_description("page not found on this server"), Some(404));
    assert_eq!(match_description("user is not found"), None);
}

#[test]
fn test_scenarios() {
    assert_eq!(match_description("Bad Request"), Some(400));
    assert_eq!(match_description("internal server error"), Some(500));
    assert_eq!(match_description("this is not a valid request"), None);
    assert_eq!(match_description("I'm a teapot"), Some(418));
    assert_eq!(match_description("too many requests please"), Some(429));
    assert_eq!(match_description("Switching protocols now"), Some(101));
    assert_eq!(match_description("the requested resource was gone"), Some(410));
    assert_eq!(match_description("server with that header"), Some(206));
}

#[test]
fn test_unrelated_or_empty_text() {
    assert_eq!(match_description(""), None);
    assert_eq!(match_description("my favorite color is blue"), None);
    assert_eq!(match_description("gateway"), None);
    assert_eq!(match_description("legal"), None);
    assert_eq!(match_description("!!!"), None);
}

#[test]
fn test_repeated_calls_agree() {
    let inputs = ["not found", "server timeout", "bad", "blue sky", "Moved"];
    for input in inputs {
        let first = match_description(input);
        for _ in 0..5 {
            assert_eq!(match_description(input), first, "{:?} drifted", input);
        }
    }
}
