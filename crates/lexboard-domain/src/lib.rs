//! Lexboard Domain Layer
//!
//! This crate contains the core data model for the legal-case research
//! dashboard. It defines the fundamental concepts, value objects, and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **CaseRecord**: A legal precedent, fully normalized (defaults applied,
//!   tags deduplicated) at the point it enters the core
//! - **ViewedTagsState**: The bounded, most-recent-first record of which
//!   cases a user has opened and which topic tags those views exposed
//! - **ExpertiseProfile**: A user's declared practice areas, mapped through
//!   a fixed table to the tag vocabulary used for relevance filtering
//!
//! ## Architecture
//!
//! Infrastructure implementations (the REST store, the local cache, the
//! history tracker) live in other crates and plug in through the traits
//! defined in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod expertise;
pub mod history;
pub mod id;
pub mod traits;

// Re-exports for convenience
pub use case::{
    CaseRecord, CaseSubmission, CitationRisk, CourtLevel, NewCaseInput, OutcomeAlignment, RawCase,
    ValidationError, Verdict, DEFAULT_PRECEDENT_STRENGTH,
};
pub use expertise::ExpertiseProfile;
pub use history::{ViewHistoryEntry, ViewedTagsState, MAX_TAGS, MAX_VIEWED_CASES};
pub use id::{CaseId, UserId};
