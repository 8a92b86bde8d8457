//! Session-level errors

use lexboard_domain::ValidationError;
use thiserror::Error;

/// Errors surfaced by dashboard session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// A submission failed validation; nothing was sent to the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation requires an active session
    #[error("not signed in")]
    NotSignedIn,

    /// The account does not meet the contribution requirements
    #[error("account is not eligible to add cases")]
    NotEligible,

    /// The case store reported a failure
    #[error("store error: {0}")]
    Store(String),
}
