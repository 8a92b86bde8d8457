//! Signup draft persistence
//!
//! The multi-step signup form keeps its in-progress profile in the local
//! cache so an interrupted signup can resume. Cache failures degrade: a
//! failed save loses the draft, a failed load starts the form fresh.

use lexboard_domain::traits::LocalCache;
use lexboard_history::SIGNUP_DRAFT_KEY;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The profile fields collected across the signup steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftProfile {
    /// Practice areas selected so far
    #[serde(default)]
    pub practice_areas: Vec<String>,
    /// Declared years of professional experience
    #[serde(default)]
    pub years_of_experience: u32,
}

/// Persist the draft; a cache failure is logged and the draft is lost
pub fn save_draft<C: LocalCache>(cache: &mut C, draft: &DraftProfile) {
    match serde_json::to_string(draft) {
        Ok(raw) => {
            if let Err(e) = cache.set(SIGNUP_DRAFT_KEY, &raw) {
                warn!(error = %e, "signup draft not saved");
            }
        }
        Err(e) => warn!(error = %e, "signup draft not encoded"),
    }
}

/// Load a saved draft; absent or corrupt entries start the form fresh
pub fn load_draft<C: LocalCache>(cache: &C) -> Option<DraftProfile> {
    let raw = match cache.get(SIGNUP_DRAFT_KEY) {
        Ok(value) => value?,
        Err(e) => {
            warn!(error = %e, "signup draft not readable");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(draft) => Some(draft),
        Err(e) => {
            warn!(error = %e, "discarding corrupt signup draft");
            None
        }
    }
}

/// Remove the draft once signup completes
pub fn clear_draft<C: LocalCache>(cache: &mut C) {
    if let Err(e) = cache.remove(SIGNUP_DRAFT_KEY) {
        warn!(error = %e, "signup draft not removed");
    }
}
