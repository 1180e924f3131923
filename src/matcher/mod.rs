// SPDX-License-Identifier: PMPL-1.0-or-later

//! Free-text description to status code matching

pub mod engine;
pub mod rules;

use crate::types::StatusCode;

pub use engine::{DescriptionMatcher, Stage, Verdict};
pub use rules::{MatchRule, RuleSet};

/// Find the status code a free-text description refers to.
///
/// Returns `None` when nothing matches; that is an ordinary outcome, not an
/// error. Matching is case-insensitive.
///
/// # Examples
///
/// ```
/// use http_status_meaning::match_description;
/// assert_eq!(match_description("Not Found"), Some(404));
/// assert_eq!(match_description("internal server error"), Some(500));
/// assert_eq!(match_description("this is not a valid request"), None);
/// ```
pub fn match_description(text: &str) -> Option<StatusCode> {
    DescriptionMatcher::standard().find(text)
}
