//! The dashboard session controller
//!
//! Owns one session's worth of dashboard state: the case snapshot, the
//! active filter, the comparison selection, the view-history tracker, and
//! the account's expertise and eligibility. Everything derived (filtered
//! list, recommendations, comparison summary) is computed on demand from
//! that state and never cached.

use crate::eligibility::SubmitterEligibility;
use crate::error::SessionError;
use lexboard_domain::traits::{CaseStore, LocalCache, ViewStore};
use lexboard_domain::{CaseId, CaseRecord, ExpertiseProfile, NewCaseInput, UserId};
use lexboard_engine::{
    filter_cases, recommend, CaseFilter, ComparisonSelection, ComparisonSummary,
};
use lexboard_history::{HistoryTracker, LoadState};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Session controller over a case store `S`, a view store `V`, and a local
/// cache `C`
pub struct DashboardController<S, V, C> {
    store: Arc<S>,
    tracker: HistoryTracker<V, C>,
    session: Option<UserId>,
    eligibility: Option<SubmitterEligibility>,
    expertise: ExpertiseProfile,
    cases: Vec<CaseRecord>,
    filter: CaseFilter,
    selection: ComparisonSelection,
}

impl<S, V, C> DashboardController<S, V, C>
where
    S: CaseStore,
    V: ViewStore + Send + Sync + 'static,
    C: LocalCache,
{
    /// Create a controller; call [`DashboardController::initialize`] before
    /// the first render.
    pub fn new(store: Arc<S>, tracker: HistoryTracker<V, C>, session: Option<UserId>) -> Self {
        Self {
            store,
            tracker,
            session,
            eligibility: None,
            expertise: ExpertiseProfile::default(),
            cases: Vec::new(),
            filter: CaseFilter::new(),
            selection: ComparisonSelection::new(),
        }
    }

    /// Load view history and the case snapshot
    pub async fn initialize(&mut self) -> Result<(), SessionError> {
        self.tracker.initialize().await;
        self.refresh_cases().await
    }

    /// Reload the case snapshot from the store.
    ///
    /// On failure the previous snapshot is kept and the error is surfaced.
    pub async fn refresh_cases(&mut self) -> Result<(), SessionError> {
        let cases = self
            .store
            .list_cases()
            .await
            .map_err(|e| SessionError::Store(e.to_string()))?;
        info!(count = cases.len(), "case snapshot refreshed");
        self.cases = cases;
        Ok(())
    }

    /// Switch the active session.
    ///
    /// View history and the comparison selection are session-scoped and
    /// reset; eligibility and expertise must be supplied again from the new
    /// account's profile. Call [`DashboardController::initialize`] after.
    pub fn set_session(&mut self, session: Option<UserId>) {
        self.tracker.set_session(session.clone());
        self.session = session;
        self.eligibility = None;
        self.expertise = ExpertiseProfile::default();
        self.selection.clear();
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&UserId> {
        self.session.as_ref()
    }

    /// Supply the account's contribution eligibility
    pub fn set_eligibility(&mut self, eligibility: Option<SubmitterEligibility>) {
        self.eligibility = eligibility;
    }

    /// Whether the add-case surface is available
    pub fn can_add_cases(&self) -> bool {
        self.session.is_some() && self.eligibility.is_some_and(|e| e.can_add_cases())
    }

    /// Supply the account's declared practice areas
    pub fn set_expertise(&mut self, expertise: ExpertiseProfile) {
        self.expertise = expertise;
    }

    /// The current case snapshot, newest first
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Set the free-text search term
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }

    /// Set the inclusive year bounds
    pub fn set_year_range(&mut self, range: (i32, i32)) {
        self.filter.year_range = range;
    }

    /// Toggle a discrete court or verdict token by sidebar id
    pub fn toggle_filter(&mut self, id: &str) -> bool {
        self.filter.toggle_token(id)
    }

    /// Enable or disable the expertise-relevance predicate
    pub fn set_relevance_only(&mut self, enabled: bool) {
        self.filter.relevance_only = enabled;
    }

    /// Reset the discrete tokens and year range
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// The current filter inputs
    pub fn filter(&self) -> &CaseFilter {
        &self.filter
    }

    /// Apply the current filter to the snapshot.
    ///
    /// The expertise tag set is recomputed on every pass so a profile
    /// change takes effect immediately.
    pub fn filtered_cases(&self) -> Vec<&CaseRecord> {
        let mut filter = self.filter.clone();
        filter.expertise_tags = self.expertise.relevance_tags();
        filter_cases(&self.cases, &filter)
    }

    /// Recommendation candidates for the current view history
    pub fn recommendations(&self) -> Vec<&CaseRecord> {
        recommend(&self.cases, self.tracker.state())
    }

    /// The tag titling the recommendation surface
    pub fn recommendation_title(&self) -> Option<&str> {
        self.tracker.most_recent_tag()
    }

    /// Whether any view history exists
    pub fn has_history(&self) -> bool {
        self.tracker.has_history()
    }

    /// The history tracker's load state
    pub fn history_load_state(&self) -> LoadState {
        self.tracker.load_state()
    }

    /// Record that the user opened a case.
    ///
    /// Unknown ids are a no-op. Returns the remote-sync handle when one was
    /// spawned; dropping it is fine.
    pub fn view_case(&mut self, case_id: &CaseId) -> Option<JoinHandle<()>> {
        let case = self.cases.iter().find(|c| &c.id == case_id)?;
        let (id, tags) = (case.id.clone(), case.tags.clone());
        self.tracker.track_case_view(id, &tags)
    }

    /// Clear view history locally and remotely
    pub async fn clear_history(&mut self) {
        self.tracker.clear_history().await;
    }

    /// Toggle a case in or out of the comparison selection
    pub fn toggle_compare(&mut self, case_id: &CaseId) -> bool {
        let Some(case) = self.cases.iter().find(|c| &c.id == case_id).cloned() else {
            return false;
        };
        self.selection.toggle(&case)
    }

    /// Remove a case from the comparison selection
    pub fn remove_compare(&mut self, case_id: &CaseId) -> bool {
        self.selection.remove(case_id)
    }

    /// Empty the comparison selection
    pub fn clear_compare(&mut self) {
        self.selection.clear();
    }

    /// The comparison selection
    pub fn selection(&self) -> &ComparisonSelection {
        &self.selection
    }

    /// Open the comparison view; `None` unless two or more cases are
    /// selected
    pub fn open_comparison(&self) -> Option<ComparisonSummary> {
        ComparisonSummary::of(&self.selection)
    }

    /// Submit a new precedent.
    ///
    /// Validation runs first; the sign-in and eligibility gates follow. On
    /// success the stored record is prepended to the snapshot.
    pub async fn submit_case(&mut self, input: NewCaseInput) -> Result<CaseRecord, SessionError> {
        input.validate()?;
        let user = self.session.clone().ok_or(SessionError::NotSignedIn)?;
        if !self.eligibility.is_some_and(|e| e.can_add_cases()) {
            return Err(SessionError::NotEligible);
        }
        let record = self
            .store
            .insert_case(input, &user)
            .await
            .map_err(|e| SessionError::Store(e.to_string()))?;
        info!(case = %record.id, "case submitted");
        self.cases.insert(0, record.clone());
        Ok(record)
    }
}
