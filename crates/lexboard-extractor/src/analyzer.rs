//! AI gateway client for judgment analysis

use crate::error::ExtractorError;
use crate::fields::ExtractedFields;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default model served by the gateway
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

/// Judgment text beyond this length is truncated before analysis
pub const MAX_INPUT_CHARS: usize = 15_000;

/// Default timeout for analysis requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const SYSTEM_PROMPT: &str = r#"You are a legal document analyzer. Analyze the provided legal judgment text and extract structured information.

Return a JSON object with the following fields:
- caseName: The name of the case (e.g., "Smith v. State of Maharashtra")
- citation: The legal citation (e.g., "(2024) 5 SCC 1")
- year: The year of the judgment (number)
- courtLevel: The court level - must be one of: "Supreme Court", "High Court", or "Tribunal"
- verdict: The verdict - must be one of: "Allowed", "Dismissed", or "Pending"
- summary: A concise summary of the case (2-3 sentences)
- ratioDecidendi: The core legal principle established by this case
- precedentStrength: A score from 0-100 indicating the authority/importance of this precedent
- citationRisk: The citation risk - must be one of: "safe", "caution", or "weak"
- outcomeAlignment: The outcome alignment - must be one of: "plaintiff", "defendant", or "neutral"
- tags: An array of relevant legal topic tags (e.g., ["Constitutional Law", "Fundamental Rights"])

If any field cannot be determined from the text, provide a reasonable default or null.
Always return valid JSON only, no additional text."#;

/// Client for the analysis gateway's chat-completions endpoint
pub struct CaseAnalyzer {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl CaseAnalyzer {
    /// Create an analyzer against `endpoint` with the default model
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ExtractorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            client,
        })
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Analyze raw judgment text into structured form-prefill fields.
    ///
    /// # Errors
    ///
    /// - [`ExtractorError::RateLimited`] on HTTP 429
    /// - [`ExtractorError::QuotaExhausted`] on HTTP 402
    /// - [`ExtractorError::MalformedResponse`] when the reply does not
    ///   decode; no partial fields are ever returned
    /// - [`ExtractorError::Failed`] for transport and other gateway errors
    pub async fn analyze(&self, raw_text: &str) -> Result<ExtractedFields, ExtractorError> {
        let excerpt = truncate_chars(raw_text, MAX_INPUT_CHARS);
        debug!(chars = excerpt.len(), model = %self.model, "submitting judgment for analysis");

        let user_content =
            format!("Analyze this legal judgment and extract structured data:\n\n{excerpt}");
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_content,
                },
            ],
            response_format: ResponseFormat { kind: "json_object" },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ExtractorError::RateLimited);
        }
        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(ExtractorError::QuotaExhausted);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ExtractorError::Failed(format!("HTTP {status}: {body}")));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractorError::MalformedResponse(e.to_string()))?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ExtractorError::Failed("no response from model".to_string()))?;

        ExtractedFields::parse(&content)
    }
}

/// Truncate on a character boundary, never mid-codepoint
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
