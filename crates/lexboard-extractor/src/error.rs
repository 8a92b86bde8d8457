//! Error types for judgment analysis

use thiserror::Error;

/// Errors that can occur during judgment analysis
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The gateway rate-limited the request (HTTP 429)
    #[error("analysis rate limited")]
    RateLimited,

    /// The workspace has exhausted its quota (HTTP 402)
    #[error("analysis quota exhausted")]
    QuotaExhausted,

    /// Transport failure or an unexpected gateway response
    #[error("analysis failed: {0}")]
    Failed(String),

    /// The model's reply could not be parsed into structured fields
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl ExtractorError {
    /// The actionable message shown to the user for this failure class.
    ///
    /// Retry is always manual (re-upload); nothing here retries
    /// automatically, and a failure never partially populates the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractorError::RateLimited => "Rate limits exceeded, please try again later.",
            ExtractorError::QuotaExhausted => {
                "Payment required, please add funds to your workspace."
            }
            ExtractorError::Failed(_) | ExtractorError::MalformedResponse(_) => {
                "AI analysis failed. Please try uploading the document again."
            }
        }
    }
}

impl From<reqwest::Error> for ExtractorError {
    fn from(e: reqwest::Error) -> Self {
        ExtractorError::Failed(e.to_string())
    }
}
