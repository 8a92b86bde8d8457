//! Tag-based recommendation selector
//!
//! "You might also like" candidates are the first ten unviewed cases that
//! share at least one tag (case-insensitively) with the viewed-tags list.
//! Collection order is preserved; there is no overlap scoring.

use lexboard_domain::{CaseRecord, ViewedTagsState};
use std::collections::HashSet;

/// Maximum number of recommendation candidates
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Select recommendation candidates from the collection.
///
/// An empty viewed-tag list yields an empty result; the recommendation
/// surface is not rendered at all in that case.
pub fn recommend<'a>(cases: &'a [CaseRecord], history: &ViewedTagsState) -> Vec<&'a CaseRecord> {
    if history.tags.is_empty() {
        return Vec::new();
    }

    let tag_set: HashSet<String> = history.tags.iter().map(|t| t.to_lowercase()).collect();

    cases
        .iter()
        .filter(|case| {
            !history.has_viewed(&case.id)
                && case.tags.iter().any(|tag| tag_set.contains(&tag.to_lowercase()))
        })
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexboard_domain::{CaseId, CourtLevel, RawCase, Verdict};

    fn case(id: &str, tags: &[&str]) -> CaseRecord {
        RawCase {
            id: CaseId::from(id),
            name: format!("Case {id}"),
            citation: "Cite".to_string(),
            year: 2020,
            court: CourtLevel::High,
            verdict: Verdict::Allowed,
            summary: "Summary".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            precedent_strength: None,
            citation_risk: None,
            outcome_alignment: None,
            ratio_decidendi: None,
            cited_by_count: None,
            created_at: 0,
            created_by: None,
        }
        .normalize()
    }

    fn history(tags: &[&str], viewed: &[&str]) -> ViewedTagsState {
        ViewedTagsState {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            viewed_case_ids: viewed.iter().map(|id| CaseId::from(*id)).collect(),
        }
    }

    #[test]
    fn test_empty_history_yields_nothing() {
        let cases = vec![case("a", &["Tax Law"])];
        assert!(recommend(&cases, &ViewedTagsState::default()).is_empty());
    }

    #[test]
    fn test_viewed_cases_are_excluded() {
        let cases = vec![case("a", &["Tax Law"]), case("b", &["Tax Law"])];
        let result = recommend(&cases, &history(&["Tax Law"], &["a"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, CaseId::from("b"));
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let cases = vec![case("a", &["TAX LAW"])];
        assert_eq!(recommend(&cases, &history(&["tax law"], &[])).len(), 1);
    }

    #[test]
    fn test_unrelated_cases_do_not_qualify() {
        let cases = vec![case("a", &["Criminal Law"])];
        assert!(recommend(&cases, &history(&["Tax Law"], &[])).is_empty());
    }

    #[test]
    fn test_capped_at_ten_in_collection_order() {
        let cases: Vec<CaseRecord> = (0..15)
            .map(|i| case(&format!("c{i}"), &["Tax Law"]))
            .collect();
        let result = recommend(&cases, &history(&["Tax Law"], &[]));
        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result[0].id, CaseId::from("c0"));
        assert_eq!(result[9].id, CaseId::from("c9"));
    }

    #[test]
    fn test_title_is_most_recent_tag() {
        let state = history(&["Banking Law", "Tax Law"], &[]);
        assert_eq!(state.most_recent_tag(), Some("Banking Law"));
    }
}
