// SPDX-License-Identifier: PMPL-1.0-or-later

//! Errors raised at the crate's input boundaries.
//!
//! The lookup functions themselves never fail. These errors come from the
//! layers that accept raw, untyped input (JSON values, query-string style
//! parameters, configuration files) and must reject it explicitly.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Status code is required")]
    MissingCode,

    #[error("Invalid status code format")]
    InvalidCodeFormat,

    #[error("Description is required")]
    MissingDescription,

    #[error("Could not find a status code matching \"{input}\"")]
    NoMatch { input: String },

    #[error("expected a status code or description, found {found}")]
    TypeMismatch { found: &'static str },

    #[error("unknown category \"{key}\" (expected informational, success, redirection, clientError or serverError)")]
    UnknownCategory { key: String },

    #[error("unsupported configuration format for {}", path.display())]
    UnsupportedConfig { path: PathBuf },
}

impl LookupError {
    /// HTTP status an API handler should answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            LookupError::NoMatch { .. } => 404,
            LookupError::UnsupportedConfig { .. } => 500,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(LookupError::MissingCode.to_string(), "Status code is required");
        assert_eq!(
            LookupError::NoMatch { input: "blue".to_string() }.to_string(),
            "Could not find a status code matching \"blue\""
        );
        assert_eq!(
            LookupError::TypeMismatch { found: "boolean" }.to_string(),
            "expected a status code or description, found boolean"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(LookupError::InvalidCodeFormat.http_status(), 400);
        assert_eq!(LookupError::NoMatch { input: String::new() }.http_status(), 404);
    }
}
