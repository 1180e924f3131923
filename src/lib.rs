// SPDX-License-Identifier: PMPL-1.0-or-later

//! http-status-meaning: HTTP status code reference data and fuzzy lookup.
//!
//! Given a numeric code or a free-text description, this crate returns the
//! code's human-readable meaning, its category, common use cases, and
//! localized text in ten languages.
//!
//! PILLARS:
//! 1. **Catalog**: the fixed table of status codes and their meanings, plus
//!    use cases and translations.
//! 2. **Matcher**: a prioritized cascade of matching strategies that maps a
//!    description such as "resource not found" to 404, while refusing
//!    negated or unrelated text.
//! 3. **Lookup**: the public operations, which accept either form of input
//!    and never fail; unknown input degrades to sentinel values.
//!
//! ```
//! use http_status_meaning::{category, meaning};
//! assert_eq!(meaning(404, None), "Not Found - The requested resource does not exist.");
//! assert_eq!(meaning("Not Found", None), meaning(404, None));
//! assert_eq!(category("Bad Request", None), "Client Error");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod lookup;
pub mod matcher;
pub mod report;
pub mod types;

pub use error::LookupError;
pub use i18n::Lang;
pub use lookup::{
    all_codes, category, codes_by_category, is_client_error, is_informational, is_redirection,
    is_server_error, is_success, meaning, resolve, supported_languages, use_cases,
};
pub use matcher::match_description;
pub use report::StatusReport;
pub use types::{StatusCategory, StatusCode, StatusQuery};
