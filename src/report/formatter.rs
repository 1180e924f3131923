// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering of status reports

use crate::report::StatusReport;
use crate::types::{StatusCategory, StatusCode};
use colored::*;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Which part of a report to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Meaning,
    Category,
    UseCases,
    Details,
}

impl DisplayMode {
    /// Details win over the category, the category over use cases.
    pub fn from_flags(category: bool, use_cases: bool, details: bool) -> Self {
        if details {
            DisplayMode::Details
        } else if category {
            DisplayMode::Category
        } else if use_cases {
            DisplayMode::UseCases
        } else {
            DisplayMode::Meaning
        }
    }
}

pub struct ReportFormatter {
    color: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, report: &StatusReport, mode: DisplayMode) -> String {
        let code = self.code(report.code, report.status_category());
        match mode {
            DisplayMode::Meaning => format!("{}: {}", code, report.meaning),
            DisplayMode::Category => format!(
                "{}: {}",
                code,
                self.paint(&report.category, report.status_category())
            ),
            DisplayMode::UseCases => {
                if report.use_cases.is_empty() {
                    return format!("{}: {}", code, self.dim("No documented use cases"));
                }
                let mut lines = vec![format!("{} {}", code, self.bold("Use Cases:"))];
                lines.extend(self.bullets(&report.use_cases));
                lines.join("\n")
            }
            DisplayMode::Details => self.render_details(report),
        }
    }

    fn render_details(&self, report: &StatusReport) -> String {
        let mut lines = vec![
            format!(
                "{} {}",
                self.bold("Status Code:"),
                self.code(report.code, report.status_category())
            ),
            format!("{} {}", self.bold("Meaning:"), report.meaning),
            format!(
                "{} {}",
                self.bold("Category:"),
                self.paint(&report.category, report.status_category())
            ),
        ];
        if report.use_cases.is_empty() {
            lines.push(format!("{} {}", self.bold("Use Cases:"), self.dim("None documented")));
        } else {
            lines.push(self.bold("Use Cases:"));
            lines.extend(self.bullets(&report.use_cases));
        }
        lines.join("\n")
    }

    /// One `code: meaning` line per entry.
    pub fn render_listing(&self, entries: &BTreeMap<StatusCode, String>) -> String {
        entries
            .iter()
            .map(|(&code, meaning)| {
                format!("{}: {}", self.code(code, StatusCategory::of(code)), meaning)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn bullets(&self, items: &[String]) -> Vec<String> {
        items
            .iter()
            .map(|item| format!("  {} {}", self.dim("•"), item))
            .collect()
    }

    fn code(&self, code: impl Display, category: StatusCategory) -> String {
        self.paint(&code.to_string(), category)
    }

    fn paint(&self, text: &str, category: StatusCategory) -> String {
        if !self.color {
            return text.to_string();
        }
        let painted = match category {
            StatusCategory::Informational => text.blue(),
            StatusCategory::Success => text.green(),
            StatusCategory::Redirection => text.cyan(),
            StatusCategory::ClientError => text.yellow(),
            StatusCategory::ServerError => text.red(),
            StatusCategory::Unknown => text.bright_black(),
        };
        painted.to_string()
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ReportFormatter {
        ReportFormatter::with_color(false)
    }

    #[test]
    fn test_mode_precedence() {
        assert_eq!(DisplayMode::from_flags(true, true, true), DisplayMode::Details);
        assert_eq!(DisplayMode::from_flags(true, true, false), DisplayMode::Category);
        assert_eq!(DisplayMode::from_flags(false, true, false), DisplayMode::UseCases);
        assert_eq!(DisplayMode::from_flags(false, false, false), DisplayMode::Meaning);
    }

    #[test]
    fn test_render_meaning_and_category() {
        let report = StatusReport::for_code(404, None);
        assert_eq!(
            plain().render(&report, DisplayMode::Meaning),
            "404: Not Found - The requested resource does not exist."
        );
        assert_eq!(plain().render(&report, DisplayMode::Category), "404: Client Error");
    }

    #[test]
    fn test_render_use_cases() {
        let none = StatusReport::for_code(418, None);
        assert_eq!(
            plain().render(&none, DisplayMode::UseCases),
            "418: No documented use cases"
        );
        let some = StatusReport::for_code(503, None);
        let rendered = plain().render(&some, DisplayMode::UseCases);
        assert!(rendered.starts_with("503 Use Cases:\n  • During scheduled maintenance"));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_render_details() {
        let rendered = plain().render(&StatusReport::for_code(999, None), DisplayMode::Details);
        assert_eq!(
            rendered,
            "Status Code: 999\nMeaning: Unknown status code\nCategory: Unknown\nUse Cases: None documented"
        );
    }

    #[test]
    fn test_render_out_of_range_code() {
        let report = StatusReport::for_code(70000, None);
        assert_eq!(
            plain().render(&report, DisplayMode::Meaning),
            "70000: Unknown status code"
        );
        assert_eq!(
            plain().render(&StatusReport::for_code(-5, None), DisplayMode::Category),
            "-5: Unknown"
        );
    }

    #[test]
    fn test_render_listing() {
        let mut entries = BTreeMap::new();
        entries.insert(201, "Created".to_string());
        entries.insert(200, "OK".to_string());
        assert_eq!(plain().render_listing(&entries), "200: OK\n201: Created");
    }
}
