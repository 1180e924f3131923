// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for http-status-meaning.
//!
//! Provides the translation tables for status meanings and category names.
//!
//! ## Supported languages
//!
//! | Code | Language   | Native name |
//! |------|------------|-------------|
//! | en   | English    | English     |
//! | es   | Spanish    | Español     |
//! | fr   | French     | Français    |
//! | de   | German     | Deutsch     |
//! | pt   | Portuguese | Português   |
//! | it   | Italian    | Italiano    |
//! | ru   | Russian    | Русский     |
//! | zh   | Chinese    | 中文         |
//! | ja   | Japanese   | 日本語       |
//! | ar   | Arabic     | العربية     |
//!
//! ## Design
//!
//! Category names are translated for every language. Status meanings are
//! only translated for the most common codes (200, 201, 400, 401, 403, 404,
//! 500, 503); everything else falls back to the canonical English text.
//! An unrecognised language tag is not an error: it resolves to English.
//!
//! The tables are embedded at compile time as static data.

mod catalog;

pub use catalog::{category_name, resolve_lang, translated_meaning, Lang};

/// Language codes in display order.
///
/// Returns a fresh vector on every call, so callers may modify it freely.
pub fn supported_languages() -> Vec<&'static str> {
    Lang::all().iter().map(Lang::code).collect()
}
