//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates: the REST client in
//! `lexboard-store`, the file-backed cache in `lexboard-history`.

use crate::case::{CaseRecord, NewCaseInput};
use crate::history::ViewHistoryEntry;
use crate::id::{CaseId, UserId};
use std::fmt::Display;
use std::future::Future;

/// Trait for the persistent case record store
pub trait CaseStore {
    /// Error type for store operations
    type Error: Display + Send;

    /// List all case records, newest first
    fn list_cases(&self) -> impl Future<Output = Result<Vec<CaseRecord>, Self::Error>> + Send;

    /// Insert a new case on behalf of `creator`.
    ///
    /// The eligibility gate is applied upstream; the store may still reject
    /// the write under its own row-level policy, which surfaces as an error
    /// and is never retried here.
    fn insert_case(
        &self,
        input: NewCaseInput,
        creator: &UserId,
    ) -> impl Future<Output = Result<CaseRecord, Self::Error>> + Send;
}

/// Trait for the remote view-history store
///
/// Rows are keyed by (user, case): `upsert_view` updates an existing row
/// rather than inserting a duplicate, so out-of-order completion of
/// concurrent upserts is harmless.
pub trait ViewStore {
    /// Error type for view-store operations
    type Error: Display + Send;

    /// List a user's views, most recent first, bounded by the store
    fn list_views(
        &self,
        user: &UserId,
    ) -> impl Future<Output = Result<Vec<ViewHistoryEntry>, Self::Error>> + Send;

    /// Insert or update the (user, case) view row
    fn upsert_view(
        &self,
        user: &UserId,
        case_id: &CaseId,
        tags: &[String],
        viewed_at: u64,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Delete all of a user's view rows
    fn delete_all_views(
        &self,
        user: &UserId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Trait for the local key-value string cache.
///
/// Callers treat read failures as "no value" and write failures as no-ops;
/// implementations report errors so the caller can log them, but nothing in
/// the core propagates them further.
pub trait LocalCache {
    /// Error type for cache operations
    type Error: Display;

    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value; absent keys are not an error
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;
}
