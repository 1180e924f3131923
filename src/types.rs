// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for http-status-meaning

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HTTP status code.
///
/// Any value is accepted. Codes that are not in the catalog are reported as
/// unknown rather than rejected.
pub type StatusCode = u16;

/// The five status classes plus a catch-all for out-of-range codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusCategory {
    /// Classify a code by its numeric range.
    pub fn of(code: StatusCode) -> Self {
        match code {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            500..=599 => StatusCategory::ServerError,
            _ => StatusCategory::Unknown,
        }
    }

    /// Canonical English name, also the key into the category translations.
    pub fn name(&self) -> &'static str {
        match self {
            StatusCategory::Informational => "Informational",
            StatusCategory::Success => "Success",
            StatusCategory::Redirection => "Redirection",
            StatusCategory::ClientError => "Client Error",
            StatusCategory::ServerError => "Server Error",
            StatusCategory::Unknown => "Unknown",
        }
    }

    /// Filter key accepted by `codes_by_category`.
    ///
    /// `Unknown` has no key: nothing in the catalog falls outside 1xx-5xx.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            StatusCategory::Informational => Some("informational"),
            StatusCategory::Success => Some("success"),
            StatusCategory::Redirection => Some("redirection"),
            StatusCategory::ClientError => Some("clientError"),
            StatusCategory::ServerError => Some("serverError"),
            StatusCategory::Unknown => None,
        }
    }

    /// Parse a filter key. Keys are matched exactly (`clientError`, not
    /// `ClientError` or `client error`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "informational" => Some(StatusCategory::Informational),
            "success" => Some(StatusCategory::Success),
            "redirection" => Some(StatusCategory::Redirection),
            "clientError" => Some(StatusCategory::ClientError),
            "serverError" => Some(StatusCategory::ServerError),
            _ => None,
        }
    }

    /// The five filterable categories, in numeric order.
    pub fn all() -> &'static [StatusCategory] {
        &[
            StatusCategory::Informational,
            StatusCategory::Success,
            StatusCategory::Redirection,
            StatusCategory::ClientError,
            StatusCategory::ServerError,
        ]
    }

    pub fn contains(&self, code: StatusCode) -> bool {
        *self != StatusCategory::Unknown && StatusCategory::of(code) == *self
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A lookup input: a literal code, free text, or nothing at all.
///
/// Every public lookup accepts `impl Into<StatusQuery>` and resolves it the
/// same way: numbers and digit-only text are taken as codes, anything else
/// goes through the description matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusQuery {
    Number(i64),
    Text(String),
    Missing,
}

impl StatusQuery {
    /// Numeric pass-through. Returns `Err(text)` when the input has to be
    /// matched as a description.
    pub fn literal_code(&self) -> Result<Option<StatusCode>, &str> {
        match self {
            StatusQuery::Number(n) => Ok(StatusCode::try_from(*n).ok()),
            StatusQuery::Text(text) if is_all_digits(text) => Ok(text.parse().ok()),
            StatusQuery::Text(text) => Err(text),
            StatusQuery::Missing => Ok(None),
        }
    }
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

macro_rules! query_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StatusQuery {
                fn from(value: $ty) -> Self {
                    StatusQuery::Number(i64::from(value))
                }
            }
        )*
    };
}

query_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl From<&str> for StatusQuery {
    fn from(value: &str) -> Self {
        StatusQuery::Text(value.to_string())
    }
}

impl From<String> for StatusQuery {
    fn from(value: String) -> Self {
        StatusQuery::Text(value)
    }
}

impl From<&String> for StatusQuery {
    fn from(value: &String) -> Self {
        StatusQuery::Text(value.clone())
    }
}

impl<T: Into<StatusQuery>> From<Option<T>> for StatusQuery {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(StatusQuery::Missing)
    }
}
