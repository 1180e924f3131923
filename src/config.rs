// SPDX-License-Identifier: PMPL-1.0-or-later

//! CLI configuration loading.
//!
//! Settings come from three layers, later ones winning: an optional
//! JSON/YAML file, environment variables, then command-line flags (applied
//! by the binary).

use crate::error::LookupError;
use crate::i18n::Lang;
use crate::report::ReportOutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Language override. Wins over the config file, loses to `--language`.
pub const LANG_ENV: &str = "HTTP_STATUS_LANG";

/// Any non-empty value disables colored output (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Language tag. Unsupported tags are kept and fall back to English at
    /// lookup time, same as the `--language` flag.
    pub language: String,
    pub color: bool,
    pub format: ReportOutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Lang::default().code().to_string(),
            color: true,
            format: ReportOutputFormat::default(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display())),
            _ => Err(LookupError::UnsupportedConfig {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }

    /// Load from `path` if given, otherwise start from defaults, then apply
    /// environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup function.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(lang) = lookup(LANG_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!(language = %lang, "language from environment");
            self.language = lang;
        }
        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.language, "en");
        assert!(config.color);
        assert_eq!(config.format, ReportOutputFormat::Text);
    }

    #[test]
    fn test_load_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let yaml = dir.path().join("http-status.yaml");
        fs::write(&yaml, "language: de\nformat: json\n").unwrap();
        let config = CliConfig::load(&yaml).expect("yaml config");
        assert_eq!(config.language, "de");
        assert_eq!(config.format, ReportOutputFormat::Json);
        assert!(config.color);

        let json = dir.path().join("http-status.json");
        fs::write(&json, r#"{"color": false}"#).unwrap();
        let config = CliConfig::load(&json).expect("json config");
        assert_eq!(config.language, "en");
        assert!(!config.color);
    }

    #[test]
    fn test_rejects_unknown_extension_and_fields() {
        let dir = TempDir::new().unwrap();
        let toml = dir.path().join("http-status.toml");
        fs::write(&toml, "language = 'fr'").unwrap();
        let err = CliConfig::load(&toml).unwrap_err();
        assert!(err.to_string().contains("unsupported configuration format"));

        let typo = dir.path().join("typo.json");
        fs::write(&typo, r#"{"langauge": "fr"}"#).unwrap();
        assert!(CliConfig::load(&typo).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(LANG_ENV, "ja"), (NO_COLOR_ENV, "1")].into_iter().collect();
        let mut config = CliConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.language, "ja");
        assert!(!config.color);

        let dir = TempDir::new().unwrap();
        let yaml = dir.path().join("http-status.yaml");
        fs::write(&yaml, "language: de\n").unwrap();
        let mut from_file = CliConfig::load(&yaml).expect("yaml config");
        from_file.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(from_file.language, "ja");

        let mut untouched = CliConfig::default();
        untouched.apply_env(|_| Some(String::new()));
        assert_eq!(untouched, CliConfig::default());
    }
}
