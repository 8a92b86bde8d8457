//! Structured fields extracted from a judgment
//!
//! The model is instructed to answer with one JSON object; models
//! sometimes wrap it in a markdown code block anyway, so the fence is
//! stripped before parsing. Parsing is all-or-nothing: a reply that does
//! not decode leaves the form untouched.

use crate::error::ExtractorError;
use lexboard_domain::{CitationRisk, CourtLevel, NewCaseInput, OutcomeAlignment, Verdict};
use serde::Deserialize;

/// Fields extracted from judgment text, loosely matching the case record's
/// optional shape. Everything is optional; the user reviews and completes
/// the form before submission.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    /// Case name, e.g. "Smith v. State of Maharashtra"
    #[serde(default)]
    pub case_name: Option<String>,
    /// Legal citation, e.g. "(2024) 5 SCC 1"
    #[serde(default)]
    pub citation: Option<String>,
    /// Year of the judgment
    #[serde(default)]
    pub year: Option<i32>,
    /// Court level
    #[serde(default)]
    pub court_level: Option<CourtLevel>,
    /// Verdict
    #[serde(default)]
    pub verdict: Option<Verdict>,
    /// Concise summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Core legal principle established by the case
    #[serde(default)]
    pub ratio_decidendi: Option<String>,
    /// Authority score, 0-100
    #[serde(default)]
    pub precedent_strength: Option<i64>,
    /// Citation-risk classification
    #[serde(default)]
    pub citation_risk: Option<CitationRisk>,
    /// Outcome-alignment classification
    #[serde(default)]
    pub outcome_alignment: Option<OutcomeAlignment>,
    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ExtractedFields {
    /// Parse a model reply, stripping a markdown code fence if present
    pub fn parse(response: &str) -> Result<Self, ExtractorError> {
        let json = strip_fence(response);
        serde_json::from_str(json).map_err(|e| ExtractorError::MalformedResponse(e.to_string()))
    }

    /// Prefill a submission form from the extracted fields
    pub fn into_input(self) -> NewCaseInput {
        NewCaseInput {
            name: self.case_name.unwrap_or_default(),
            citation: self.citation.unwrap_or_default(),
            year: self.year,
            court: self.court_level,
            verdict: self.verdict,
            summary: self.summary.unwrap_or_default(),
            tags: self.tags,
            precedent_strength: self.precedent_strength,
            citation_risk: self.citation_risk,
            outcome_alignment: self.outcome_alignment,
            ratio_decidendi: self.ratio_decidendi,
            cited_by_count: None,
        }
    }
}

fn strip_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the language tag on the opening fence
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .trim_end()
        .trim_end_matches("```")
        .trim()
}
