// SPDX-License-Identifier: PMPL-1.0-or-later

//! Public lookup operations.
//!
//! Every function taking a query resolves it the same way: numbers and
//! digit-only strings are codes, other text is matched as a description.
//! Nothing here fails; unresolvable input degrades to "Unknown status code",
//! "Unknown", `false`, or an empty list.

use crate::catalog::{self, STATUS_CODES, UNKNOWN_MEANING};
use crate::i18n::{self, Lang};
use crate::matcher;
use crate::types::{StatusCategory, StatusCode, StatusQuery};
use std::collections::BTreeMap;

/// Resolve a query to a code without consulting the catalog.
///
/// Literal codes pass through untouched, even when they are not catalogued.
pub fn resolve(query: impl Into<StatusQuery>) -> Option<StatusCode> {
    let query = query.into();
    match query.literal_code() {
        Ok(code) => code,
        Err(text) => matcher::match_description(text),
    }
}

/// Human-readable meaning of a code or description.
pub fn meaning(query: impl Into<StatusQuery>, lang: Option<&str>) -> String {
    match resolve(query) {
        Some(code) => meaning_for_code(code, i18n::resolve_lang(lang)).to_string(),
        None => UNKNOWN_MEANING.to_string(),
    }
}

/// Category name of a code or description, localized.
pub fn category(query: impl Into<StatusQuery>, lang: Option<&str>) -> String {
    let category = resolve(query).map_or(StatusCategory::Unknown, StatusCategory::of);
    i18n::category_name(i18n::resolve_lang(lang), category).to_string()
}

pub fn is_informational(query: impl Into<StatusQuery>) -> bool {
    in_category(query, StatusCategory::Informational)
}

pub fn is_success(query: impl Into<StatusQuery>) -> bool {
    in_category(query, StatusCategory::Success)
}

pub fn is_redirection(query: impl Into<StatusQuery>) -> bool {
    in_category(query, StatusCategory::Redirection)
}

pub fn is_client_error(query: impl Into<StatusQuery>) -> bool {
    in_category(query, StatusCategory::ClientError)
}

pub fn is_server_error(query: impl Into<StatusQuery>) -> bool {
    in_category(query, StatusCategory::ServerError)
}

fn in_category(query: impl Into<StatusQuery>, category: StatusCategory) -> bool {
    resolve(query).is_some_and(|code| category.contains(code))
}

/// Catalog entries in one category, keyed by code.
///
/// `key` is one of `informational`, `success`, `redirection`, `clientError`
/// or `serverError`; any other key yields an empty map.
pub fn codes_by_category(key: &str, lang: Option<&str>) -> BTreeMap<StatusCode, String> {
    let Some(category) = StatusCategory::from_key(key) else {
        tracing::debug!(key, "unrecognised category key");
        return BTreeMap::new();
    };
    let lang = i18n::resolve_lang(lang);
    STATUS_CODES
        .iter()
        .filter(|(code, _)| category.contains(*code))
        .map(|&(code, _)| (code, meaning_for_code(code, lang).to_string()))
        .collect()
}

/// Every catalog entry, keyed by code.
pub fn all_codes(lang: Option<&str>) -> BTreeMap<StatusCode, String> {
    let lang = i18n::resolve_lang(lang);
    STATUS_CODES
        .iter()
        .map(|&(code, _)| (code, meaning_for_code(code, lang).to_string()))
        .collect()
}

/// Documented use cases for a code or description, in display order.
pub fn use_cases(query: impl Into<StatusQuery>) -> Vec<&'static str> {
    resolve(query)
        .map(|code| catalog::use_cases_for(code).to_vec())
        .unwrap_or_default()
}

/// Language codes with translation tables. A fresh copy on every call.
pub fn supported_languages() -> Vec<&'static str> {
    i18n::supported_languages()
}

/// Meaning of a resolved code: translation, then English, then the
/// unknown-code sentinel.
pub(crate) fn meaning_for_code(code: StatusCode, lang: Lang) -> &'static str {
    i18n::translated_meaning(lang, code)
        .or_else(|| catalog::meaning_of(code))
        .unwrap_or(UNKNOWN_MEANING)
}
