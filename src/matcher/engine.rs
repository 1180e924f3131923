// SPDX-License-Identifier: PMPL-1.0-or-later

//! Description matching engine.
//!
//! Matching is an ordered cascade of stages. Each stage either decides
//! (a code, or an outright rejection) or passes the text on to the next one.
//! Later stages get progressively fuzzier, so the order is what keeps the
//! fuzzy stages from producing false positives the exact ones would avoid.

use crate::catalog::{self, STATUS_CODES};
use crate::matcher::rules::{contains_token, RuleSet, MIN_OVERLAP_SCORE, MIN_WORD_CHARS};
use crate::types::StatusCode;
use regex::Regex;
use std::sync::OnceLock;

/// Outcome of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match(StatusCode),
    Reject,
    Continue,
}

/// One step of the cascade. `text` is already lowercased.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, text: &str, rules: &RuleSet) -> Verdict;
}

/// A scored guess produced while ranking catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchCandidate {
    code: StatusCode,
    score: u32,
}

impl MatchCandidate {
    /// Keep the earlier candidate on ties so catalog order decides.
    fn better(best: Option<Self>, next: Self) -> Option<Self> {
        match best {
            Some(current) if current.score >= next.score => Some(current),
            _ => Some(next),
        }
    }
}

pub struct DescriptionMatcher {
    rules: RuleSet,
    stages: Vec<Box<dyn Stage>>,
}

impl DescriptionMatcher {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            stages: vec![
                Box::new(NegativePhraseVeto),
                Box::new(DirectMapping),
                Box::new(NotFoundPhrase),
                Box::new(KeywordScan),
                Box::new(LikelihoodFilter),
                Box::new(ExactMeaning),
                Box::new(MeaningContainment),
                Box::new(WordOverlap),
            ],
        }
    }

    /// Process-wide matcher over the built-in tables.
    pub fn standard() -> &'static DescriptionMatcher {
        static MATCHER: OnceLock<DescriptionMatcher> = OnceLock::new();
        MATCHER.get_or_init(DescriptionMatcher::new)
    }

    /// Stage names in evaluation order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Find the status code a description refers to.
    pub fn find(&self, description: &str) -> Option<StatusCode> {
        self.explain(description).map(|(code, _)| code)
    }

    /// Like [`find`](Self::find), also naming the stage that matched.
    pub fn explain(&self, description: &str) -> Option<(StatusCode, &'static str)> {
        if description.is_empty() {
            return None;
        }
        let text = description.to_lowercase();

        for stage in &self.stages {
            match stage.evaluate(&text, &self.rules) {
                Verdict::Match(code) => {
                    tracing::trace!(stage = stage.name(), code, input = %description, "description matched");
                    return Some((code, stage.name()));
                }
                Verdict::Reject => {
                    tracing::trace!(stage = stage.name(), input = %description, "description rejected");
                    return None;
                }
                Verdict::Continue => {}
            }
        }

        tracing::trace!(input = %description, "no stage matched description");
        None
    }
}

impl Default for DescriptionMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Stages ─────────────────────────────────────────────────────────

struct NegativePhraseVeto;

impl Stage for NegativePhraseVeto {
    fn name(&self) -> &'static str {
        "negative-phrase"
    }

    fn evaluate(&self, text: &str, rules: &RuleSet) -> Verdict {
        if rules.is_negated(text) {
            Verdict::Reject
        } else {
            Verdict::Continue
        }
    }
}

struct DirectMapping;

impl Stage for DirectMapping {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn evaluate(&self, text: &str, rules: &RuleSet) -> Verdict {
        rules.direct_match(text).map_or(Verdict::Continue, Verdict::Match)
    }
}

/// "not found" anywhere in the text means 404, ahead of the keyword scan.
struct NotFoundPhrase;

impl Stage for NotFoundPhrase {
    fn name(&self) -> &'static str {
        "not-found"
    }

    fn evaluate(&self, text: &str, _rules: &RuleSet) -> Verdict {
        if text.contains("not found") {
            Verdict::Match(404)
        } else {
            Verdict::Continue
        }
    }
}

struct KeywordScan;

impl Stage for KeywordScan {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn evaluate(&self, text: &str, rules: &RuleSet) -> Verdict {
        rules
            .keywords
            .iter()
            .find(|rule| contains_token(text, rule.phrase))
            .map_or(Verdict::Continue, |rule| Verdict::Match(rule.code))
    }
}

/// Rejects text that does not look like a status description at all, so the
/// catalog-wide scans below cannot stumble into a match.
struct LikelihoodFilter;

impl LikelihoodFilter {
    fn is_plausible(text: &str, rules: &RuleSet) -> bool {
        if rules.direct_match(text).is_some() {
            return true;
        }
        if rules.is_negated(text) {
            return false;
        }
        if rules.keywords.iter().any(|rule| text.contains(rule.phrase)) {
            return true;
        }
        if rules.common_phrases.contains(&text) {
            return true;
        }
        rules.vocabulary.iter().any(|word| contains_token(text, word))
    }
}

impl Stage for LikelihoodFilter {
    fn name(&self) -> &'static str {
        "likelihood"
    }

    fn evaluate(&self, text: &str, rules: &RuleSet) -> Verdict {
        if Self::is_plausible(text, rules) {
            Verdict::Continue
        } else {
            Verdict::Reject
        }
    }
}

struct ExactMeaning;

impl Stage for ExactMeaning {
    fn name(&self) -> &'static str {
        "exact-meaning"
    }

    fn evaluate(&self, text: &str, _rules: &RuleSet) -> Verdict {
        STATUS_CODES
            .iter()
            .find(|(_, meaning)| {
                meaning.to_lowercase() == text
                    || catalog::short_title(meaning).to_lowercase() == text
            })
            .map_or(Verdict::Continue, |&(code, _)| Verdict::Match(code))
    }
}

/// Entries whose meaning contains the whole text, scored by text length.
struct MeaningContainment;

impl Stage for MeaningContainment {
    fn name(&self) -> &'static str {
        "containment"
    }

    fn evaluate(&self, text: &str, _rules: &RuleSet) -> Verdict {
        let score = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        STATUS_CODES
            .iter()
            .filter(|(_, meaning)| meaning.to_lowercase().contains(text))
            .map(|&(code, _)| MatchCandidate { code, score })
            .fold(None, MatchCandidate::better)
            .map_or(Verdict::Continue, |best| Verdict::Match(best.code))
    }
}

/// Ranks entries by how many significant words of the text they share.
///
/// Whole-word hits score 3, bare substring hits 1, and more than one
/// whole-word hit doubles the entry's score.
struct WordOverlap;

impl WordOverlap {
    fn significant_words(text: &str, rules: &RuleSet) -> Vec<(String, Option<Regex>)> {
        text.split_whitespace()
            .filter(|word| word.chars().count() > MIN_WORD_CHARS)
            .filter(|word| !rules.is_stop_word(word))
            .map(|word| {
                let pattern = format!(r"\b{}\b", regex::escape(word));
                let boundary = Regex::new(&pattern)
                    .map_err(|err| tracing::debug!(word, %err, "skipping word-boundary check"))
                    .ok();
                (word.to_string(), boundary)
            })
            .collect()
    }

    fn score(meaning: &str, words: &[(String, Option<Regex>)]) -> u32 {
        let mut score = 0;
        let mut whole_words = 0;
        for (word, boundary) in words {
            if boundary.as_ref().is_some_and(|re| re.is_match(meaning)) {
                whole_words += 1;
                score += 3;
            } else if meaning.contains(word.as_str()) {
                score += 1;
            }
        }
        if whole_words > 1 {
            score *= 2;
        }
        score
    }
}

impl Stage for WordOverlap {
    fn name(&self) -> &'static str {
        "word-overlap"
    }

    fn evaluate(&self, text: &str, rules: &RuleSet) -> Verdict {
        let words = Self::significant_words(text, rules);
        if words.is_empty() {
            return Verdict::Continue;
        }

        let best = STATUS_CODES
            .iter()
            .map(|&(code, meaning)| MatchCandidate {
                code,
                score: Self::score(&meaning.to_lowercase(), &words),
            })
            .filter(|candidate| candidate.score > 0)
            .fold(None, MatchCandidate::better);

        match best {
            Some(candidate) if candidate.score > MIN_OVERLAP_SCORE => Verdict::Match(candidate.code),
            _ => Verdict::Continue,
        }
    }
}
