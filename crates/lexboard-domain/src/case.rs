//! Legal case records and their normalization
//!
//! Raw rows arrive from storage (or from the submission form) with optional
//! and possibly out-of-range fields. Defaulting and clamping happen exactly
//! once, here, when a record enters the core; every downstream component
//! operates on fully populated [`CaseRecord`] values.

use crate::id::{CaseId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default precedent-strength score applied when a record carries none
pub const DEFAULT_PRECEDENT_STRENGTH: u8 = 75;

/// Inclusive bounds on a plausible judgment year
pub const YEAR_RANGE: (i32, i32) = (1900, 2099);

/// Court level of a judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtLevel {
    /// Apex court
    #[serde(rename = "Supreme Court")]
    Supreme,
    /// High court
    #[serde(rename = "High Court")]
    High,
    /// Specialized tribunal
    #[serde(rename = "Tribunal")]
    Tribunal,
    /// Appellate court
    #[serde(rename = "Appellate Court")]
    Appellate,
    /// District court
    #[serde(rename = "District Court")]
    District,
    /// State court
    #[serde(rename = "State Court")]
    State,
}

impl CourtLevel {
    /// Human-readable name, as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtLevel::Supreme => "Supreme Court",
            CourtLevel::High => "High Court",
            CourtLevel::Tribunal => "Tribunal",
            CourtLevel::Appellate => "Appellate Court",
            CourtLevel::District => "District Court",
            CourtLevel::State => "State Court",
        }
    }

    /// Sidebar filter token for this court level
    pub fn token(&self) -> &'static str {
        match self {
            CourtLevel::Supreme => "supreme",
            CourtLevel::High => "high",
            CourtLevel::Tribunal => "tribunal",
            CourtLevel::Appellate => "appellate",
            CourtLevel::District => "district",
            CourtLevel::State => "state",
        }
    }

    /// Resolve a sidebar filter token back to a court level
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "supreme" => Some(CourtLevel::Supreme),
            "high" => Some(CourtLevel::High),
            "tribunal" => Some(CourtLevel::Tribunal),
            "appellate" => Some(CourtLevel::Appellate),
            "district" => Some(CourtLevel::District),
            "state" => Some(CourtLevel::State),
            _ => None,
        }
    }
}

impl fmt::Display for CourtLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of a judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Petition or appeal allowed
    Allowed,
    /// Petition or appeal dismissed
    Dismissed,
    /// Remanded to a lower court
    Remanded,
    /// Lower-court decision reversed
    Reversed,
    /// Settled between parties
    Settled,
    /// Judgment pending
    Pending,
}

impl Verdict {
    /// Human-readable name, as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allowed => "Allowed",
            Verdict::Dismissed => "Dismissed",
            Verdict::Remanded => "Remanded",
            Verdict::Reversed => "Reversed",
            Verdict::Settled => "Settled",
            Verdict::Pending => "Pending",
        }
    }

    /// Sidebar filter token for this verdict
    pub fn token(&self) -> &'static str {
        match self {
            Verdict::Allowed => "allowed",
            Verdict::Dismissed => "dismissed",
            Verdict::Remanded => "remanded",
            Verdict::Reversed => "reversed",
            Verdict::Settled => "settled",
            Verdict::Pending => "pending",
        }
    }

    /// Resolve a sidebar filter token back to a verdict
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "allowed" => Some(Verdict::Allowed),
            "dismissed" => Some(Verdict::Dismissed),
            "remanded" => Some(Verdict::Remanded),
            "reversed" => Some(Verdict::Reversed),
            "settled" => Some(Verdict::Settled),
            "pending" => Some(Verdict::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How safe a case is to rely on as authority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationRisk {
    /// Settled, binding authority
    #[default]
    Safe,
    /// Authority with known caveats
    Caution,
    /// Weak or doubted authority
    Weak,
}

/// Which party the outcome favoured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeAlignment {
    /// Outcome favoured the plaintiff
    Plaintiff,
    /// Outcome favoured the defendant
    Defendant,
    /// No clear party alignment
    #[default]
    Neutral,
}

/// A fully normalized legal case record
///
/// Identifiers are immutable; `precedent_strength` is always within
/// `[0, 100]`; tags are deduplicated case-insensitively with the first-seen
/// casing preserved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    /// Unique, immutable identifier
    pub id: CaseId,
    /// Case name, e.g. "Smith v. State of Maharashtra"
    pub name: String,
    /// Legal citation string, e.g. "(2024) 5 SCC 1"
    pub citation: String,
    /// Year of the judgment
    pub year: i32,
    /// Court level
    pub court: CourtLevel,
    /// Verdict
    pub verdict: Verdict,
    /// Free-text summary
    pub summary: String,
    /// Topic tags, deduplicated case-insensitively
    pub tags: Vec<String>,
    /// Authority score in `[0, 100]`
    pub precedent_strength: u8,
    /// Citation-risk classification
    pub citation_risk: CitationRisk,
    /// Outcome-alignment classification
    pub outcome_alignment: OutcomeAlignment,
    /// The binding legal principle of the judgment, when extracted
    pub ratio_decidendi: Option<String>,
    /// How many later cases cite this one
    pub cited_by_count: u32,
    /// Creation timestamp, milliseconds since the Unix epoch
    pub created_at: u64,
    /// Creator; system-seeded records have none
    pub created_by: Option<UserId>,
}

/// A case row as it arrives from storage, before normalization
///
/// Optional columns may be absent or out of range; [`RawCase::normalize`]
/// is the single place defaults and clamping are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCase {
    /// Store-assigned identifier
    pub id: CaseId,
    /// Case name
    pub name: String,
    /// Citation string
    pub citation: String,
    /// Year of the judgment
    pub year: i32,
    /// Court level
    pub court: CourtLevel,
    /// Verdict
    pub verdict: Verdict,
    /// Free-text summary
    pub summary: String,
    /// Topic tags; may contain case-insensitive duplicates
    #[serde(default)]
    pub tags: Vec<String>,
    /// Authority score; may be absent or out of range
    #[serde(default)]
    pub precedent_strength: Option<i64>,
    /// Citation-risk classification
    #[serde(default)]
    pub citation_risk: Option<CitationRisk>,
    /// Outcome-alignment classification
    #[serde(default)]
    pub outcome_alignment: Option<OutcomeAlignment>,
    /// Ratio decidendi text
    #[serde(default)]
    pub ratio_decidendi: Option<String>,
    /// Cited-by count; may be absent or negative
    #[serde(default)]
    pub cited_by_count: Option<i64>,
    /// Creation timestamp, milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: u64,
    /// Creator identifier
    #[serde(default)]
    pub created_by: Option<UserId>,
}

impl RawCase {
    /// Apply defaults and clamping, producing a fully populated record
    pub fn normalize(self) -> CaseRecord {
        CaseRecord {
            id: self.id,
            name: self.name,
            citation: self.citation,
            year: self.year,
            court: self.court,
            verdict: self.verdict,
            summary: self.summary,
            tags: dedup_tags(self.tags),
            precedent_strength: clamp_strength(self.precedent_strength),
            citation_risk: self.citation_risk.unwrap_or_default(),
            outcome_alignment: self.outcome_alignment.unwrap_or_default(),
            ratio_decidendi: self.ratio_decidendi,
            cited_by_count: self.cited_by_count.map_or(0, |n| n.max(0) as u32),
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

/// Deduplicate tags case-insensitively, preserving order and first-seen casing
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            out.push(tag);
        }
    }
    out
}

fn clamp_strength(raw: Option<i64>) -> u8 {
    match raw {
        Some(n) => n.clamp(0, 100) as u8,
        None => DEFAULT_PRECEDENT_STRENGTH,
    }
}

/// A submission-time validation failure
///
/// Nothing is mutated and nothing is sent to the store when validation
/// fails; the form simply reports the problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or unset
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    /// Year outside the plausible range
    #[error("year {0} outside the supported range")]
    YearOutOfRange(i32),
}

/// Payload for submitting a new precedent
///
/// Mirrors the add-case form: the six headline fields are required, the
/// analysis fields are optional and fall back to the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCaseInput {
    /// Case name (required)
    pub name: String,
    /// Citation string (required)
    pub citation: String,
    /// Year of the judgment (required, plausible 4-digit year)
    pub year: Option<i32>,
    /// Court level (required)
    pub court: Option<CourtLevel>,
    /// Verdict (required)
    pub verdict: Option<Verdict>,
    /// Free-text summary (required)
    pub summary: String,
    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Authority score, defaulting to [`DEFAULT_PRECEDENT_STRENGTH`]
    #[serde(default)]
    pub precedent_strength: Option<i64>,
    /// Citation-risk classification, defaulting to safe
    #[serde(default)]
    pub citation_risk: Option<CitationRisk>,
    /// Outcome alignment, defaulting to neutral
    #[serde(default)]
    pub outcome_alignment: Option<OutcomeAlignment>,
    /// Ratio decidendi text
    #[serde(default)]
    pub ratio_decidendi: Option<String>,
    /// Cited-by count, defaulting to zero
    #[serde(default)]
    pub cited_by_count: Option<i64>,
}

/// A validated, fully defaulted submission, ready for a store that assigns
/// its own identifier and timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseSubmission {
    /// Case name
    pub name: String,
    /// Citation string
    pub citation: String,
    /// Year of the judgment
    pub year: i32,
    /// Court level
    pub court: CourtLevel,
    /// Verdict
    pub verdict: Verdict,
    /// Free-text summary
    pub summary: String,
    /// Topic tags, deduplicated case-insensitively
    pub tags: Vec<String>,
    /// Authority score in `[0, 100]`
    pub precedent_strength: u8,
    /// Citation-risk classification
    pub citation_risk: CitationRisk,
    /// Outcome-alignment classification
    pub outcome_alignment: OutcomeAlignment,
    /// Ratio decidendi text
    pub ratio_decidendi: Option<String>,
    /// Cited-by count
    pub cited_by_count: u32,
}

impl NewCaseInput {
    /// Check the required fields without consuming the input
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.citation.trim().is_empty() {
            return Err(ValidationError::MissingField("citation"));
        }
        let year = self.year.ok_or(ValidationError::MissingField("year"))?;
        if year < YEAR_RANGE.0 || year > YEAR_RANGE.1 {
            return Err(ValidationError::YearOutOfRange(year));
        }
        if self.court.is_none() {
            return Err(ValidationError::MissingField("court"));
        }
        if self.verdict.is_none() {
            return Err(ValidationError::MissingField("verdict"));
        }
        if self.summary.trim().is_empty() {
            return Err(ValidationError::MissingField("summary"));
        }
        Ok(())
    }

    /// Validate and apply defaults, without assigning an identifier.
    ///
    /// This is the form sent to stores that mint their own ids; the same
    /// clamping and deduplication as [`RawCase::normalize`] applies.
    pub fn into_submission(self) -> Result<CaseSubmission, ValidationError> {
        self.validate()?;
        Ok(CaseSubmission {
            name: self.name,
            citation: self.citation,
            year: self.year.ok_or(ValidationError::MissingField("year"))?,
            court: self.court.ok_or(ValidationError::MissingField("court"))?,
            verdict: self.verdict.ok_or(ValidationError::MissingField("verdict"))?,
            summary: self.summary,
            tags: dedup_tags(self.tags),
            precedent_strength: clamp_strength(self.precedent_strength),
            citation_risk: self.citation_risk.unwrap_or_default(),
            outcome_alignment: self.outcome_alignment.unwrap_or_default(),
            ratio_decidendi: self.ratio_decidendi,
            cited_by_count: self.cited_by_count.map_or(0, |n| n.max(0) as u32),
        })
    }

    /// Validate and turn the submission into a normalized record
    pub fn into_record(
        self,
        id: CaseId,
        created_by: Option<UserId>,
        created_at: u64,
    ) -> Result<CaseRecord, ValidationError> {
        let s = self.into_submission()?;
        Ok(CaseRecord {
            id,
            name: s.name,
            citation: s.citation,
            year: s.year,
            court: s.court,
            verdict: s.verdict,
            summary: s.summary,
            tags: s.tags,
            precedent_strength: s.precedent_strength,
            citation_risk: s.citation_risk,
            outcome_alignment: s.outcome_alignment,
            ratio_decidendi: s.ratio_decidendi,
            cited_by_count: s.cited_by_count,
            created_at,
            created_by,
        })
    }
}
