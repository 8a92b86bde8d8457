//! Lexboard Record Store Client
//!
//! HTTP/JSON client for the hosted record service (a PostgREST-style API):
//! the `legal_cases` table of precedent records and the `case_views` table
//! of per-user view history. Implements the domain [`CaseStore`] and
//! [`ViewStore`] traits; everything above this crate is transport-agnostic.

#![warn(missing_docs)]

use lexboard_domain::traits::{CaseStore, ViewStore};
use lexboard_domain::{
    CaseId, CaseRecord, NewCaseInput, RawCase, UserId, ValidationError, ViewHistoryEntry,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from the record service
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("store unreachable: {0}")]
    Communication(#[from] reqwest::Error),

    /// The service rejected the request
    #[error("store rejected request (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, best effort
        message: String,
    },

    /// The service's row-level policy rejected the write.
    ///
    /// The eligibility gate runs upstream, so reaching this means
    /// eligibility changed mid-session; the error is surfaced, never
    /// retried.
    #[error("store denied permission for this write")]
    PermissionDenied,

    /// The service answered with something unexpected
    #[error("invalid store response: {0}")]
    InvalidResponse(String),

    /// The submission failed validation; nothing was sent
    #[error("invalid submission: {0}")]
    InvalidSubmission(#[from] ValidationError),
}

/// Client for the hosted record service
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CaseInsertBody<'a> {
    name: &'a str,
    citation: &'a str,
    year: i32,
    court: lexboard_domain::CourtLevel,
    verdict: lexboard_domain::Verdict,
    summary: &'a str,
    tags: &'a [String],
    precedent_strength: u8,
    citation_risk: lexboard_domain::CitationRisk,
    outcome_alignment: lexboard_domain::OutcomeAlignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    ratio_decidendi: Option<&'a str>,
    cited_by_count: u32,
    created_by: &'a UserId,
}

#[derive(Deserialize)]
struct ViewRow {
    user_id: UserId,
    case_id: CaseId,
    #[serde(default)]
    tags: Vec<String>,
    viewed_at: u64,
}

#[derive(Serialize)]
struct ViewUpsertBody<'a> {
    user_id: &'a UserId,
    case_id: &'a CaseId,
    tags: &'a [String],
    viewed_at: u64,
}

impl RestStore {
    /// Create a client for the service at `base_url`, authenticating with
    /// `api_key`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::PermissionDenied);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl CaseStore for RestStore {
    type Error = StoreError;

    /// Fetch every case record, newest first, normalized on entry
    async fn list_cases(&self) -> Result<Vec<CaseRecord>, Self::Error> {
        let url = self.url("legal_cases?select=*&order=created_at.desc");
        let response = self.authed(self.client.get(&url)).send().await?;
        let rows: Vec<RawCase> = Self::check(response).await?.json().await?;
        Ok(rows.into_iter().map(RawCase::normalize).collect())
    }

    /// Insert a new case and return the stored, normalized record
    async fn insert_case(
        &self,
        input: NewCaseInput,
        creator: &UserId,
    ) -> Result<CaseRecord, Self::Error> {
        // The service assigns the id and timestamp; we send the validated,
        // fully defaulted fields so the stored row matches what local
        // normalization would produce.
        let submission = input.into_submission()?;

        let body = CaseInsertBody {
            name: &submission.name,
            citation: &submission.citation,
            year: submission.year,
            court: submission.court,
            verdict: submission.verdict,
            summary: &submission.summary,
            tags: &submission.tags,
            precedent_strength: submission.precedent_strength,
            citation_risk: submission.citation_risk,
            outcome_alignment: submission.outcome_alignment,
            ratio_decidendi: submission.ratio_decidendi.as_deref(),
            cited_by_count: submission.cited_by_count,
            created_by: creator,
        };

        let url = self.url("legal_cases");
        let response = self
            .authed(self.client.post(&url))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;
        let mut rows: Vec<RawCase> = Self::check(response).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::InvalidResponse(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(rows.remove(0).normalize())
    }
}

impl ViewStore for RestStore {
    type Error = StoreError;

    /// Fetch a user's view rows, most recent first, bounded to the
    /// tracker's working-set size
    async fn list_views(&self, user: &UserId) -> Result<Vec<ViewHistoryEntry>, Self::Error> {
        let url = self.url(&format!(
            "case_views?select=*&user_id=eq.{}&order=viewed_at.desc&limit=50",
            user
        ));
        let response = self.authed(self.client.get(&url)).send().await?;
        let rows: Vec<ViewRow> = Self::check(response).await?.json().await?;
        Ok(rows
            .into_iter()
            .map(|row| ViewHistoryEntry {
                user: Some(row.user_id),
                case_id: row.case_id,
                tags: row.tags,
                viewed_at: row.viewed_at,
            })
            .collect())
    }

    /// Insert or update the (user, case) row; repeated views update rather
    /// than duplicate
    async fn upsert_view(
        &self,
        user: &UserId,
        case_id: &CaseId,
        tags: &[String],
        viewed_at: u64,
    ) -> Result<(), Self::Error> {
        let url = self.url("case_views?on_conflict=user_id,case_id");
        let body = ViewUpsertBody {
            user_id: user,
            case_id,
            tags,
            viewed_at,
        };
        let response = self
            .authed(self.client.post(&url))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Delete every view row belonging to the user
    async fn delete_all_views(&self, user: &UserId) -> Result<(), Self::Error> {
        let url = self.url(&format!("case_views?user_id=eq.{}", user));
        let response = self.authed(self.client.delete(&url)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let store = RestStore::new("https://api.example.com/rest/v1/", "key").unwrap();
        assert_eq!(
            store.url("legal_cases"),
            "https://api.example.com/rest/v1/legal_cases"
        );
    }

    #[tokio::test]
    async fn test_invalid_submission_is_rejected_before_any_request() {
        // An unreachable address would surface as a communication error if
        // the request were ever sent
        let store = RestStore::new("http://127.0.0.1:1", "key").unwrap();
        let result = store
            .insert_case(NewCaseInput::default(), &UserId::from("u1"))
            .await;
        assert!(matches!(result, Err(StoreError::InvalidSubmission(_))));
    }

    #[tokio::test]
    async fn test_unreachable_store_is_a_communication_error() {
        let store = RestStore::new("http://127.0.0.1:1", "key").unwrap();
        let result = store.list_cases().await;
        assert!(matches!(result, Err(StoreError::Communication(_))));
    }

    #[test]
    fn test_view_row_parses_wire_shape() {
        let json = r#"{
            "user_id": "u1",
            "case_id": "c1",
            "tags": ["Tax Law"],
            "viewed_at": 1700000000000
        }"#;
        let row: ViewRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.case_id, CaseId::from("c1"));
        assert_eq!(row.tags, vec!["Tax Law"]);
    }

    #[test]
    fn test_insert_body_serializes_display_names() {
        let body = CaseInsertBody {
            name: "Smith v. State",
            citation: "(2024) 5 SCC 1",
            year: 2024,
            court: lexboard_domain::CourtLevel::Supreme,
            verdict: lexboard_domain::Verdict::Allowed,
            summary: "Summary",
            tags: &[],
            precedent_strength: 75,
            citation_risk: lexboard_domain::CitationRisk::Safe,
            outcome_alignment: lexboard_domain::OutcomeAlignment::Neutral,
            ratio_decidendi: None,
            cited_by_count: 0,
            created_by: &UserId::from("u1"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["court"], "Supreme Court");
        assert_eq!(json["citation_risk"], "safe");
        assert!(json.get("ratio_decidendi").is_none());
    }
}
