//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lexboard_domain::CaseRecord;
use lexboard_engine::ComparisonSummary;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of case records.
    pub fn format_cases(&self, cases: &[&CaseRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(cases)?),
            OutputFormat::Table => Ok(self.format_cases_table(cases)),
            OutputFormat::Quiet => Ok(cases
                .iter()
                .map(|c| c.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_cases_table(&self, cases: &[&CaseRecord]) -> String {
        if cases.is_empty() {
            return self.colorize("No cases found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "ID", "Name", "Citation", "Year", "Court", "Verdict", "Strength", "Cited",
        ]);

        for case in cases {
            let id = case.id.to_string();
            let short_id: String = id.chars().take(8).collect();
            builder.push_record([
                &short_id,
                &case.name,
                &case.citation,
                &case.year.to_string(),
                case.court.as_str(),
                case.verdict.as_str(),
                &case.precedent_strength.to_string(),
                &case.cited_by_count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a comparison summary alongside its selection.
    pub fn format_comparison(
        &self,
        summary: &ComparisonSummary,
        cases: &[&CaseRecord],
    ) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            let value = serde_json::json!({
                "cases": cases,
                "max_strength": summary.max_strength,
                "max_cited": summary.max_cited,
                "strongest": summary.strongest,
                "most_cited": summary.most_cited,
                "safe_to_cite": summary.safe_to_cite,
                "total": summary.total,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = self.format_cases_table(cases);
        out.push('\n');
        let strongest = cases
            .iter()
            .find(|c| summary.is_strongest(c))
            .map(|c| c.name.as_str());
        let most_cited = cases
            .iter()
            .find(|c| summary.is_most_cited(c))
            .map(|c| c.name.as_str());
        if let Some(name) = strongest {
            out.push('\n');
            out.push_str(&self.success(&format!(
                "Strongest precedent: {} ({})",
                name, summary.max_strength
            )));
        }
        if let Some(name) = most_cited {
            out.push('\n');
            out.push_str(&self.success(&format!(
                "Most cited: {} ({})",
                name, summary.max_cited
            )));
        }
        out.push('\n');
        out.push_str(&self.info(&format!(
            "{} of {} safe to cite",
            summary.safe_to_cite, summary.total
        )));
        Ok(out)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexboard_domain::{CaseId, CourtLevel, RawCase, Verdict};

    fn create_test_case() -> CaseRecord {
        RawCase {
            id: CaseId::from("01939000-aaaa-bbbb-cccc-000000000001"),
            name: "Smith v. State".to_string(),
            citation: "(2024) 5 SCC 1".to_string(),
            year: 2024,
            court: CourtLevel::Supreme,
            verdict: Verdict::Allowed,
            summary: "A summary.".to_string(),
            tags: vec!["Tax Law".to_string()],
            precedent_strength: Some(88),
            citation_risk: None,
            outcome_alignment: None,
            ratio_decidendi: None,
            cited_by_count: Some(12),
            created_at: 0,
            created_by: None,
        }
        .normalize()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let case = create_test_case();
        let output = formatter.format_cases(&[&case]).unwrap();
        assert!(output.contains("citation"));
        assert!(output.contains("Smith v. State"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let case = create_test_case();
        let output = formatter.format_cases(&[&case]).unwrap();
        assert_eq!(output, case.id.to_string());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let case = create_test_case();
        let output = formatter.format_cases(&[&case]).unwrap();
        assert!(output.contains("Citation"));
        assert!(output.contains("Supreme Court"));
    }

    #[test]
    fn test_empty_cases() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_cases(&[]).unwrap();
        assert!(output.contains("No cases found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
