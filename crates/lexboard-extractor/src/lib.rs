//! Lexboard Judgment Extractor
//!
//! Sends raw judgment text (as extracted from an uploaded PDF) to an AI
//! gateway and parses the structured reply into form-prefill fields.
//! Failures are classified — rate-limited, quota-exhausted, generic — and
//! each class carries its own user-facing message; a malformed reply never
//! yields partially populated fields.

#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod fields;

pub use analyzer::{CaseAnalyzer, DEFAULT_MODEL, MAX_INPUT_CHARS};
pub use error::ExtractorError;
pub use fields::ExtractedFields;
