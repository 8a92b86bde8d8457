//! Lexboard Session
//!
//! Ties the engine, history tracker, and store traits together into one
//! dashboard session: the case snapshot, filtering, recommendations,
//! comparison selection, view tracking, and the gated submission flow, plus
//! the signup-draft persistence used before a session exists.

#![warn(missing_docs)]

pub mod controller;
pub mod draft;
pub mod eligibility;
pub mod error;

pub use controller::DashboardController;
pub use draft::{clear_draft, load_draft, save_draft, DraftProfile};
pub use eligibility::{SubmitterEligibility, MIN_SUBMITTER_YEARS};
pub use error::SessionError;
