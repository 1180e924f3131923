// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed reports

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportOutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn is_structured(&self) -> bool {
        !matches!(self, ReportOutputFormat::Text)
    }

    /// Serialize any report-shaped value. Text output is rendered by
    /// [`ReportFormatter`](crate::report::ReportFormatter) instead, so it
    /// falls back to pretty JSON here.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Json | ReportOutputFormat::Text => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}
