// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hand-curated phrase tables driving the description matcher.
//!
//! Declaration order is significant. The keyword table is scanned top to
//! bottom and the first structural hit wins, so more specific phrases must
//! come before the generic extras at the end ("redirect", "moved", ...).
//! The vocabulary and stop-word lists are tuned data; keep them exact.

use crate::types::StatusCode;

/// A literal lowercase phrase resolving to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub phrase: &'static str,
    pub code: StatusCode,
}

const fn rule(phrase: &'static str, code: StatusCode) -> MatchRule {
    MatchRule { phrase, code }
}

/// Whole-string matches. These win over everything except the negative veto.
pub static DIRECT_MAPPINGS: &[MatchRule] = &[
    rule("not found", 404),
    rule("bad request", 400),
    rule("unauthorized", 401),
    rule("forbidden", 403),
    rule("internal server error", 500),
    rule("service unavailable", 503),
    rule("ok", 200),
    rule("created", 201),
    rule("continue", 100),
    rule("moved permanently", 301),
    rule("found", 302),
    rule("resource not found", 404),
    rule("server internal error", 500),
    rule("not found - the requested resource does not exist.", 404),
];

/// Phrases matched as whole tokens anywhere in the text.
pub static KEYWORDS: &[MatchRule] = &[
    rule("continue", 100),
    rule("switching", 101),
    rule("processing", 102),
    rule("early hints", 103),
    rule("ok", 200),
    rule("created", 201),
    rule("accepted", 202),
    rule("non-authoritative", 203),
    rule("no content", 204),
    rule("reset", 205),
    rule("partial", 206),
    rule("multi-status", 207),
    rule("already reported", 208),
    rule("im used", 226),
    rule("multiple choices", 300),
    rule("moved permanently", 301),
    rule("found", 302),
    rule("see other", 303),
    rule("not modified", 304),
    rule("use proxy", 305),
    rule("temporary redirect", 307),
    rule("permanent redirect", 308),
    rule("bad request", 400),
    rule("unauthorized", 401),
    rule("payment required", 402),
    rule("forbidden", 403),
    rule("not found", 404),
    rule("method not allowed", 405),
    rule("not acceptable", 406),
    rule("proxy authentication", 407),
    rule("request timeout", 408),
    rule("conflict", 409),
    rule("gone", 410),
    rule("length required", 411),
    rule("precondition failed", 412),
    rule("payload too large", 413),
    rule("uri too long", 414),
    rule("unsupported media", 415),
    rule("range not satisfiable", 416),
    rule("expectation failed", 417),
    rule("teapot", 418),
    rule("misdirected", 421),
    rule("unprocessable", 422),
    rule("locked", 423),
    rule("failed dependency", 424),
    rule("too early", 425),
    rule("upgrade required", 426),
    rule("precondition required", 428),
    rule("too many requests", 429),
    rule("fields too large", 431),
    rule("legal reasons", 451),
    rule("internal server error", 500),
    rule("not implemented", 501),
    rule("bad gateway", 502),
    rule("service unavailable", 503),
    rule("gateway timeout", 504),
    rule("http version", 505),
    rule("variant", 506),
    rule("insufficient storage", 507),
    rule("loop detected", 508),
    rule("not extended", 510),
    rule("network authentication", 511),
    // Looser aliases, checked last.
    rule("redirect", 302),
    rule("moved", 301),
    rule("resource", 404),
    rule("server error", 500),
    rule("internal error", 500),
];

/// Substrings that mark a description as negated ("not a teapot").
pub static NEGATIVE_PHRASES: &[&str] = &[
    "not a ", "is not ", "not an ", "invalid ", "no such ", "unknown ",
];

/// Exact inputs that always pass the likelihood filter.
pub static COMMON_PHRASES: &[&str] = &[
    "not found",
    "bad request",
    "unauthorized",
    "forbidden",
    "ok",
    "internal server error",
    "service unavailable",
    "created",
    "continue",
];

/// Words that, as a whole token, make text look like a status description.
pub static STATUS_VOCABULARY: &[&str] = &[
    "ok",
    "success",
    "created",
    "found",
    "redirect",
    "not found",
    "error",
    "unauthorized",
    "bad",
    "forbidden",
    "server",
    "client",
    "unavailable",
    "timeout",
];

/// Words ignored by token-overlap scoring.
pub static STOP_WORDS: &[&str] = &["this", "that", "with", "from", "have", "invalid"];

/// Token-overlap words must be longer than this many characters.
pub const MIN_WORD_CHARS: usize = 3;

/// Token-overlap scores must exceed this to count as a match.
pub const MIN_OVERLAP_SCORE: u32 = 2;

/// The complete set of tables consulted by the matcher.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub direct: &'static [MatchRule],
    pub keywords: &'static [MatchRule],
    pub negative_phrases: &'static [&'static str],
    pub common_phrases: &'static [&'static str],
    pub vocabulary: &'static [&'static str],
    pub stop_words: &'static [&'static str],
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            direct: DIRECT_MAPPINGS,
            keywords: KEYWORDS,
            negative_phrases: NEGATIVE_PHRASES,
            common_phrases: COMMON_PHRASES,
            vocabulary: STATUS_VOCABULARY,
            stop_words: STOP_WORDS,
        }
    }

    pub fn direct_match(&self, text: &str) -> Option<StatusCode> {
        self.direct
            .iter()
            .find(|rule| rule.phrase == text)
            .map(|rule| rule.code)
    }

    pub fn is_negated(&self, text: &str) -> bool {
        self.negative_phrases.iter().any(|phrase| text.contains(phrase))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// True when `token` appears in `text` as a whole space-delimited token
/// sequence: equal, or bounded by a space / the string edge on both sides.
pub fn contains_token(text: &str, token: &str) -> bool {
    if text == token {
        return true;
    }
    if text.len() <= token.len() {
        return false;
    }
    text.strip_prefix(token).is_some_and(|rest| rest.starts_with(' '))
        || text.strip_suffix(token).is_some_and(|rest| rest.ends_with(' '))
        || text.contains(&format!(" {} ", token))
}
