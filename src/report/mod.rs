// SPDX-License-Identifier: PMPL-1.0-or-later

//! Status reports and the boundary handlers that build them.
//!
//! A [`StatusReport`] bundles everything known about one code. The
//! `describe_*` functions are the entry points for callers holding raw,
//! untrusted input (a query parameter, a CLI argument, a JSON value): they
//! validate it and fail with a [`LookupError`] instead of degrading silently.

pub mod formatter;
pub mod output;

use crate::catalog::UNKNOWN_MEANING;
use crate::error::LookupError;
use crate::i18n;
use crate::lookup::{self, meaning_for_code};
use crate::matcher;
use crate::types::{StatusCategory, StatusCode, StatusQuery};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use formatter::{DisplayMode, ReportFormatter};
pub use output::ReportOutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// The code as given. Integers outside the status range are kept so
    /// the report echoes what was asked for.
    pub code: i64,
    pub meaning: String,
    pub category: String,
    pub use_cases: Vec<String>,
}

impl StatusReport {
    /// Build the report for a code. Uncatalogued and out-of-range codes
    /// still get a report, with the unknown-code sentinels filled in.
    pub fn for_code(code: impl Into<i64>, lang: Option<&str>) -> Self {
        let code = code.into();
        let lang = i18n::resolve_lang(lang);
        let status = StatusCode::try_from(code).ok();
        Self {
            code,
            meaning: status
                .map_or(UNKNOWN_MEANING, |status| meaning_for_code(status, lang))
                .to_string(),
            category: i18n::category_name(
                lang,
                status.map_or(StatusCategory::Unknown, StatusCategory::of),
            )
            .to_string(),
            use_cases: status
                .map(|status| lookup::use_cases(status).into_iter().map(String::from).collect())
                .unwrap_or_default(),
        }
    }

    pub fn status_category(&self) -> StatusCategory {
        StatusCode::try_from(self.code).map_or(StatusCategory::Unknown, StatusCategory::of)
    }
}

/// Report for a code given as raw text (`"404"`).
///
/// Leading digits are taken as the code, so `"404abc"` is 404 and `"-5"` is
/// an unknown code. Text with no leading digits is rejected.
pub fn describe_code(raw: &str, lang: Option<&str>) -> Result<StatusReport, LookupError> {
    if raw.is_empty() {
        return Err(LookupError::MissingCode);
    }
    let code = parse_code_prefix(raw).ok_or(LookupError::InvalidCodeFormat)?;
    Ok(StatusReport::for_code(code, lang))
}

/// Report for a free-text description (`"Not Found"`).
pub fn describe_description(text: &str, lang: Option<&str>) -> Result<StatusReport, LookupError> {
    if text.is_empty() {
        return Err(LookupError::MissingDescription);
    }
    let code = matcher::match_description(text).ok_or_else(|| LookupError::NoMatch {
        input: text.to_string(),
    })?;
    Ok(StatusReport::for_code(code, lang))
}

/// Resolve a command-line style argument: a leading integer is a code,
/// anything else must match a description.
pub fn resolve_input(input: &str) -> Result<i64, LookupError> {
    match parse_code_prefix(input) {
        Some(n) => Ok(n),
        None => matcher::match_description(input)
            .map(i64::from)
            .ok_or_else(|| LookupError::NoMatch {
                input: input.to_string(),
            }),
    }
}

/// Parse the integer at the start of `raw`, skipping leading whitespace and
/// accepting an optional sign. Returns `None` when no digits lead the text.
pub fn parse_code_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }
    // Absurdly long digit runs are clamped rather than rejected: they are
    // never valid codes either way.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

impl TryFrom<&Value> for StatusQuery {
    type Error = LookupError;

    /// Accepts JSON numbers, strings and null. Anything else is a caller
    /// error rather than an unmatched query.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(StatusQuery::Missing),
            Value::String(text) => Ok(StatusQuery::Text(text.clone())),
            Value::Number(number) => match number.as_i64() {
                Some(n) => Ok(StatusQuery::Number(n)),
                None => number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| StatusQuery::Number(f as i64))
                    .ok_or(LookupError::TypeMismatch {
                        found: "non-integer number",
                    }),
            },
            Value::Bool(_) => Err(LookupError::TypeMismatch { found: "boolean" }),
            Value::Array(_) => Err(LookupError::TypeMismatch { found: "array" }),
            Value::Object(_) => Err(LookupError::TypeMismatch { found: "object" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_for_code() {
        let report = StatusReport::for_code(404, None);
        assert_eq!(report.meaning, "Not Found - The requested resource does not exist.");
        assert_eq!(report.category, "Client Error");
        assert_eq!(report.use_cases.len(), 3);
        assert_eq!(report.status_category(), StatusCategory::ClientError);

        let unknown = StatusReport::for_code(999, Some("fr"));
        assert_eq!(unknown.meaning, "Unknown status code");
        assert_eq!(unknown.category, "Inconnu");
        assert!(unknown.use_cases.is_empty());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let value = serde_json::to_value(StatusReport::for_code(201, None)).expect("serialize");
        assert_eq!(value["code"], 201);
        assert_eq!(value["category"], "Success");
        assert!(value["useCases"].is_array());
    }

    #[test]
    fn test_describe_code() {
        assert_eq!(describe_code("", None), Err(LookupError::MissingCode));
        assert_eq!(describe_code("abc", None), Err(LookupError::InvalidCodeFormat));
        assert_eq!(describe_code("-", None), Err(LookupError::InvalidCodeFormat));
        assert_eq!(describe_code("404abc", None).map(|r| r.code), Ok(404));
        assert_eq!(
            describe_code("500", Some("es")).map(|r| r.category),
            Ok("Error del Servidor".to_string())
        );
    }

    #[test]
    fn test_describe_code_out_of_range() {
        let negative = describe_code("-5", None).expect("negative code");
        assert_eq!(negative.code, -5);
        assert_eq!(negative.meaning, "Unknown status code");
        assert_eq!(negative.category, "Unknown");
        assert!(negative.use_cases.is_empty());

        let large = describe_code("70000", Some("de")).expect("large code");
        assert_eq!(large.code, 70000);
        assert_eq!(large.meaning, "Unknown status code");
        assert_eq!(large.category, "Unbekannt");
        assert_eq!(large.status_category(), StatusCategory::Unknown);

        assert_eq!(describe_code("-5", None).map(|r| r.meaning), Ok(crate::meaning(-5, None)));
    }

    #[test]
    fn test_describe_description() {
        assert_eq!(describe_description("", None), Err(LookupError::MissingDescription));
        assert_eq!(
            describe_description("my favorite color is blue", None),
            Err(LookupError::NoMatch {
                input: "my favorite color is blue".to_string()
            })
        );
        let report = describe_description("Bad Request", Some("de")).expect("should match");
        assert_eq!(report.code, 400);
        assert_eq!(report.category, "Client-Fehler");
    }

    #[test]
    fn test_resolve_input() {
        assert_eq!(resolve_input("404"), Ok(404));
        assert_eq!(resolve_input(" 418 teapots"), Ok(418));
        assert_eq!(resolve_input("999"), Ok(999));
        assert_eq!(resolve_input("Gateway Timeout"), Ok(504));
        assert!(matches!(resolve_input("blue"), Err(LookupError::NoMatch { .. })));
        assert_eq!(resolve_input("70000"), Ok(70000));
        assert_eq!(resolve_input("-5"), Ok(-5));
    }

    #[test]
    fn test_parse_code_prefix() {
        assert_eq!(parse_code_prefix("42"), Some(42));
        assert_eq!(parse_code_prefix("  +7x"), Some(7));
        assert_eq!(parse_code_prefix("-12"), Some(-12));
        assert_eq!(parse_code_prefix("x12"), None);
        assert_eq!(parse_code_prefix("-"), None);
        assert_eq!(parse_code_prefix(""), None);
    }

    #[test]
    fn test_query_from_json() {
        assert_eq!(StatusQuery::try_from(&json!(404)), Ok(StatusQuery::Number(404)));
        assert_eq!(StatusQuery::try_from(&json!(404.0)), Ok(StatusQuery::Number(404)));
        assert_eq!(
            StatusQuery::try_from(&json!("Not Found")),
            Ok(StatusQuery::Text("Not Found".to_string()))
        );
        assert_eq!(StatusQuery::try_from(&json!(null)), Ok(StatusQuery::Missing));
        assert_eq!(
            StatusQuery::try_from(&json!(true)),
            Err(LookupError::TypeMismatch { found: "boolean" })
        );
        assert_eq!(
            StatusQuery::try_from(&json!([404])),
            Err(LookupError::TypeMismatch { found: "array" })
        );
        assert!(StatusQuery::try_from(&json!(404.5)).is_err());
    }
}
