//! The view-history tracker
//!
//! Owns the in-memory [`ViewedTagsState`] for one session and keeps the
//! local cache and (when a session is active) the remote view store in
//! step with it. The in-memory state is authoritative for the current
//! session's UI; remote sync is fire-and-forget and idempotent per
//! (user, case).

use crate::cache::{VIEWED_CASES_KEY, VIEWED_TAGS_KEY};
use lexboard_domain::traits::{LocalCache, ViewStore};
use lexboard_domain::{CaseId, UserId, ViewedTagsState};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::task::JoinHandle;
use tracing::warn;

/// Where the current state was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySource {
    /// Local cache only (no session, or the remote load failed)
    Local,
    /// Remote view store; the local cache was overwritten with this result
    Remote,
}

/// Initialization state of the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// `initialize` has not completed for the current session
    Loading,
    /// State is ready, loaded from the given source
    Ready(HistorySource),
}

/// A remote view store that holds nothing, for anonymous local-only
/// sessions and tools that never sync
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewStore;

impl ViewStore for NullViewStore {
    type Error = Infallible;

    async fn list_views(
        &self,
        _user: &UserId,
    ) -> Result<Vec<lexboard_domain::ViewHistoryEntry>, Self::Error> {
        Ok(Vec::new())
    }

    async fn upsert_view(
        &self,
        _user: &UserId,
        _case_id: &CaseId,
        _tags: &[String],
        _viewed_at: u64,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn delete_all_views(&self, _user: &UserId) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A history load in flight, detached from the tracker.
///
/// Produced by [`HistoryTracker::start_load`]; holds no borrow of the
/// tracker, so the session can change while the fetch is awaited. The
/// result is applied with [`HistoryTracker::finish_load`], which discards
/// it if the session changed in between.
pub struct HistoryLoad<S> {
    generation: u64,
    session: Option<UserId>,
    store: Arc<S>,
}

impl<S: ViewStore> HistoryLoad<S> {
    /// Run the remote fetch for this load.
    ///
    /// Without a session, or when the remote store fails, the outcome
    /// carries no remote rows and the commit falls back to the local cache.
    pub async fn fetch(self) -> LoadedHistory {
        let remote = match &self.session {
            Some(user) => match self.store.list_views(user).await {
                Ok(entries) => Some(entries),
                Err(e) => {
                    warn!(user = %user, error = %e, "remote view history unavailable, using local cache");
                    None
                }
            },
            None => None,
        };
        LoadedHistory {
            generation: self.generation,
            remote,
        }
    }
}

/// The outcome of a [`HistoryLoad`] fetch, awaiting commit
pub struct LoadedHistory {
    generation: u64,
    remote: Option<Vec<lexboard_domain::ViewHistoryEntry>>,
}

/// Session-scoped view-history tracker over a remote store `S` and a local
/// cache `C`
pub struct HistoryTracker<S, C> {
    store: Arc<S>,
    cache: C,
    session: Option<UserId>,
    state: ViewedTagsState,
    load_state: LoadState,
    generation: u64,
}

impl<S, C> HistoryTracker<S, C>
where
    S: ViewStore + Send + Sync + 'static,
    C: LocalCache,
{
    /// Create a tracker; call [`HistoryTracker::initialize`] before the
    /// first render.
    pub fn new(store: Arc<S>, cache: C, session: Option<UserId>) -> Self {
        Self {
            store,
            cache,
            session,
            state: ViewedTagsState::default(),
            load_state: LoadState::Loading,
            generation: 0,
        }
    }

    /// Begin a load for the current session.
    ///
    /// The returned [`HistoryLoad`] captures the session and generation at
    /// this moment; its fetch can be awaited without borrowing the tracker.
    pub fn start_load(&self) -> HistoryLoad<S> {
        HistoryLoad {
            generation: self.generation,
            session: self.session.clone(),
            store: Arc::clone(&self.store),
        }
    }

    /// Commit a fetched load per the reconciliation policy.
    ///
    /// A remote result wins and overwrites the local cache; an outcome
    /// without remote rows falls back to the local cache, leaving remote
    /// rows untouched. A result fetched before the session changed is
    /// discarded, so a since-logged-out user never sees stale state.
    pub fn finish_load(&mut self, loaded: LoadedHistory) {
        if loaded.generation != self.generation {
            return;
        }
        match loaded.remote {
            Some(entries) => {
                let state = ViewedTagsState::from_entries(&entries);
                self.persist_local(&state);
                self.state = state;
                self.load_state = LoadState::Ready(HistorySource::Remote);
            }
            None => {
                self.state = self.read_local();
                self.load_state = LoadState::Ready(HistorySource::Local);
            }
        }
    }

    /// Load state for the current session, fetch and commit in one step
    pub async fn initialize(&mut self) {
        let loaded = self.start_load().fetch().await;
        self.finish_load(loaded);
    }

    /// Switch the active session. Resets to `Loading`; in-flight results
    /// from the previous session will be discarded.
    pub fn set_session(&mut self, session: Option<UserId>) {
        if self.session == session {
            return;
        }
        self.session = session;
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewedTagsState::default();
        self.load_state = LoadState::Loading;
    }

    /// Record a case view.
    ///
    /// In-memory and local-cache state update synchronously. With a session
    /// active, a remote upsert keyed by (user, case) is spawned; its
    /// failure is logged and never surfaced. The returned handle may be
    /// dropped; tests await it for determinism.
    pub fn track_case_view(&mut self, case_id: CaseId, tags: &[String]) -> Option<JoinHandle<()>> {
        self.state.record_view(case_id.clone(), tags);
        let snapshot = self.state.clone();
        self.persist_local(&snapshot);

        let user = self.session.clone()?;
        let store = Arc::clone(&self.store);
        let tags = tags.to_vec();
        let viewed_at = now_ms();
        Some(tokio::spawn(async move {
            if let Err(e) = store.upsert_view(&user, &case_id, &tags, viewed_at).await {
                warn!(case = %case_id, error = %e, "view sync to remote store failed");
            }
        }))
    }

    /// Clear history everywhere. Local removal stands even when the remote
    /// removal fails.
    pub async fn clear_history(&mut self) {
        for key in [VIEWED_TAGS_KEY, VIEWED_CASES_KEY] {
            if let Err(e) = self.cache.remove(key) {
                warn!(key, error = %e, "local history removal failed");
            }
        }
        self.state = ViewedTagsState::default();

        if let Some(user) = self.session.clone() {
            if let Err(e) = self.store.delete_all_views(&user).await {
                warn!(user = %user, error = %e, "remote history removal failed");
            }
        }
    }

    /// The current state
    pub fn state(&self) -> &ViewedTagsState {
        &self.state
    }

    /// The current load state
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&UserId> {
        self.session.as_ref()
    }

    /// Whether the given case has been viewed
    pub fn has_viewed(&self, case_id: &CaseId) -> bool {
        self.state.has_viewed(case_id)
    }

    /// The tag titling the recommendation surface
    pub fn most_recent_tag(&self) -> Option<&str> {
        self.state.most_recent_tag()
    }

    /// Whether any history exists
    pub fn has_history(&self) -> bool {
        self.state.has_history()
    }

    fn read_local(&self) -> ViewedTagsState {
        ViewedTagsState {
            tags: self.read_key(VIEWED_TAGS_KEY).unwrap_or_default(),
            viewed_case_ids: self.read_key(VIEWED_CASES_KEY).unwrap_or_default(),
        }
    }

    fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Option<T> {
        match self.cache.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "discarding corrupt cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "local cache read failed");
                None
            }
        }
    }

    fn persist_local(&mut self, state: &ViewedTagsState) {
        self.write_key(VIEWED_TAGS_KEY, &state.tags);
        self.write_key(VIEWED_CASES_KEY, &state.viewed_case_ids);
    }

    fn write_key<T: serde::Serialize>(&mut self, key: &'static str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(key, &raw) {
                    warn!(key, error = %e, "local cache write failed");
                }
            }
            Err(e) => warn!(key, error = %e, "failed to encode cache entry"),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
