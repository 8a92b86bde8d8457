//! View-history value objects
//!
//! [`ViewedTagsState`] is the bounded, most-recent-first digest of a user's
//! browsing: which topic tags their views exposed and which cases they have
//! already opened. It is an LRU-like structure, not a raw log; the raw log
//! lives in the remote view store as [`ViewHistoryEntry`] rows.

use crate::id::{CaseId, UserId};
use serde::{Deserialize, Serialize};

/// Maximum number of retained viewed tags
pub const MAX_TAGS: usize = 20;

/// Maximum number of retained viewed case ids
pub const MAX_VIEWED_CASES: usize = 50;

/// One remote view-history row: a (user, case) pair with the tags exposed
/// by that view. The store keeps at most one row per pair; repeat views
/// update the timestamp and tags rather than duplicating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewHistoryEntry {
    /// Viewing user; absent for anonymous, local-only sessions
    #[serde(default)]
    pub user: Option<UserId>,
    /// The viewed case
    pub case_id: CaseId,
    /// Tags on the case at the time of the view
    #[serde(default)]
    pub tags: Vec<String>,
    /// View timestamp, milliseconds since the Unix epoch
    pub viewed_at: u64,
}

/// Bounded most-recent-first view state derived from tracked views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewedTagsState {
    /// Up to [`MAX_TAGS`] unique tags, most recently exposed first
    pub tags: Vec<String>,
    /// Up to [`MAX_VIEWED_CASES`] unique case ids, most recently viewed first
    pub viewed_case_ids: Vec<CaseId>,
}

impl ViewedTagsState {
    /// Record a case view.
    ///
    /// Idempotent per case: a repeat view moves the id to the front without
    /// duplicating it. Tags not already present (case-insensitive) are
    /// prepended in the case's own tag order; both lists are then truncated
    /// to their bounds.
    pub fn record_view(&mut self, case_id: CaseId, case_tags: &[String]) {
        if let Some(pos) = self.viewed_case_ids.iter().position(|id| *id == case_id) {
            self.viewed_case_ids.remove(pos);
        }
        self.viewed_case_ids.insert(0, case_id);
        self.viewed_case_ids.truncate(MAX_VIEWED_CASES);

        let mut fresh: Vec<String> = Vec::new();
        for tag in case_tags {
            let seen = self.contains_tag(tag) || fresh.iter().any(|t| t.eq_ignore_ascii_case(tag));
            if !seen {
                fresh.push(tag.clone());
            }
        }
        if !fresh.is_empty() {
            fresh.extend(self.tags.drain(..));
            self.tags = fresh;
            self.tags.truncate(MAX_TAGS);
        }
    }

    /// Rebuild the state from remote history entries, most recent first.
    ///
    /// Tags keep their first-seen order across entries; ids are
    /// deduplicated; both lists honour the usual bounds.
    pub fn from_entries(entries: &[ViewHistoryEntry]) -> Self {
        let mut state = Self::default();
        for entry in entries {
            if !state.viewed_case_ids.contains(&entry.case_id)
                && state.viewed_case_ids.len() < MAX_VIEWED_CASES
            {
                state.viewed_case_ids.push(entry.case_id.clone());
            }
            for tag in &entry.tags {
                if state.tags.len() >= MAX_TAGS {
                    break;
                }
                if !state.contains_tag(tag) {
                    state.tags.push(tag.clone());
                }
            }
        }
        state
    }

    /// Whether a tag is already present, compared case-insensitively
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether the given case has been viewed
    pub fn has_viewed(&self, case_id: &CaseId) -> bool {
        self.viewed_case_ids.contains(case_id)
    }

    /// The single most recently exposed tag, used to title the
    /// recommendation surface
    pub fn most_recent_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Whether any history exists; the recommendation surface renders only
    /// when this is true
    pub fn has_history(&self) -> bool {
        !self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_tags_are_prepended() {
        let mut state = ViewedTagsState::default();
        state.record_view(CaseId::from("c1"), &tags(&["Tax Law", "Banking Law"]));
        state.record_view(CaseId::from("c2"), &tags(&["Criminal Law"]));
        assert_eq!(state.tags, tags(&["Criminal Law", "Tax Law", "Banking Law"]));
    }

    #[test]
    fn test_known_tags_are_not_duplicated() {
        // Second view brings no new tags, so the tag list is unchanged
        let mut state = ViewedTagsState::default();
        state.record_view(CaseId::from("c1"), &tags(&["Tax Law", "Banking Law"]));
        state.record_view(CaseId::from("c2"), &tags(&["Tax Law"]));
        assert_eq!(state.tags, tags(&["Tax Law", "Banking Law"]));
        assert_eq!(
            state.viewed_case_ids,
            vec![CaseId::from("c2"), CaseId::from("c1")]
        );
    }

    #[test]
    fn test_tag_dedup_is_case_insensitive() {
        let mut state = ViewedTagsState::default();
        state.record_view(CaseId::from("c1"), &tags(&["Tax Law"]));
        state.record_view(CaseId::from("c2"), &tags(&["TAX LAW", "tax law"]));
        assert_eq!(state.tags, tags(&["Tax Law"]));
    }

    #[test]
    fn test_repeat_view_moves_id_to_front() {
        let mut state = ViewedTagsState::default();
        state.record_view(CaseId::from("c1"), &[]);
        state.record_view(CaseId::from("c2"), &[]);
        state.record_view(CaseId::from("c1"), &[]);
        assert_eq!(
            state.viewed_case_ids,
            vec![CaseId::from("c1"), CaseId::from("c2")]
        );
    }

    #[test]
    fn test_tag_list_is_bounded_to_most_recent() {
        let mut state = ViewedTagsState::default();
        for i in 0..30 {
            state.record_view(CaseId::from(format!("c{i}").as_str()), &[format!("Tag {i}")]);
        }
        assert_eq!(state.tags.len(), MAX_TAGS);
        // Most recent insertion comes first; the oldest ten fell off
        assert_eq!(state.tags[0], "Tag 29");
        assert_eq!(state.tags[MAX_TAGS - 1], "Tag 10");
    }

    #[test]
    fn test_viewed_ids_are_bounded() {
        let mut state = ViewedTagsState::default();
        for i in 0..60 {
            state.record_view(CaseId::from(format!("c{i}").as_str()), &[]);
        }
        assert_eq!(state.viewed_case_ids.len(), MAX_VIEWED_CASES);
        assert_eq!(state.viewed_case_ids[0], CaseId::from("c59"));
    }

    #[test]
    fn test_from_entries_keeps_first_seen_order() {
        let entries = vec![
            ViewHistoryEntry {
                user: None,
                case_id: CaseId::from("b"),
                tags: tags(&["Banking Law", "Tax Law"]),
                viewed_at: 200,
            },
            ViewHistoryEntry {
                user: None,
                case_id: CaseId::from("a"),
                tags: tags(&["tax law", "Evidence"]),
                viewed_at: 100,
            },
        ];
        let state = ViewedTagsState::from_entries(&entries);
        assert_eq!(state.tags, tags(&["Banking Law", "Tax Law", "Evidence"]));
        assert_eq!(
            state.viewed_case_ids,
            vec![CaseId::from("b"), CaseId::from("a")]
        );
    }

    #[test]
    fn test_most_recent_tag_and_has_history() {
        let mut state = ViewedTagsState::default();
        assert!(!state.has_history());
        assert_eq!(state.most_recent_tag(), None);
        state.record_view(CaseId::from("c1"), &tags(&["Tax Law"]));
        assert!(state.has_history());
        assert_eq!(state.most_recent_tag(), Some("Tax Law"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: bounds hold after any sequence of views
        #[test]
        fn test_bounds_hold(views in proptest::collection::vec(("c[0-9]{1,3}", "[A-Za-z ]{1,12}"), 0..120)) {
            let mut state = ViewedTagsState::default();
            for (id, tag) in &views {
                state.record_view(CaseId::from(id.as_str()), &[tag.clone()]);
            }
            prop_assert!(state.tags.len() <= MAX_TAGS);
            prop_assert!(state.viewed_case_ids.len() <= MAX_VIEWED_CASES);
        }

        /// Property: viewed ids stay unique regardless of repeat views
        #[test]
        fn test_ids_stay_unique(views in proptest::collection::vec("c[0-9]{1,2}", 0..100)) {
            let mut state = ViewedTagsState::default();
            for id in &views {
                state.record_view(CaseId::from(id.as_str()), &[]);
            }
            let mut sorted = state.viewed_case_ids.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), state.viewed_case_ids.len());
        }
    }
}
