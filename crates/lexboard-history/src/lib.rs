//! Lexboard View History
//!
//! Tracks which cases a user has viewed and which topic tags those views
//! exposed. State lives in three places with a defined reconciliation rule:
//!
//! - in memory, authoritative for the current session's UI;
//! - in a local key-value cache, written synchronously with every view;
//! - in the remote view store, upserted asynchronously per (user, case)
//!   when a session is active.
//!
//! On initialization a successful remote load wins and overwrites the local
//! cache; a failed remote load falls back to the local cache and leaves the
//! remote state untouched. Storage failures never propagate to callers of
//! the tracker's public operations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod tracker;

pub use cache::{
    CacheError, FileCache, MemoryCache, SIGNUP_DRAFT_KEY, VIEWED_CASES_KEY, VIEWED_TAGS_KEY,
};
pub use tracker::{
    HistoryLoad, HistorySource, HistoryTracker, LoadState, LoadedHistory, NullViewStore,
};
