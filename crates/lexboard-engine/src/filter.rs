//! Filter predicate engine
//!
//! Composes the search-term, year-range, discrete court/verdict, and
//! expertise-relevance predicates into one combined predicate over the case
//! collection. All active predicates are ANDed; application preserves
//! collection order and is a pure function of its inputs.

use lexboard_domain::{CaseRecord, CourtLevel, Verdict};
use std::collections::HashSet;

/// Default inclusive year range shown by the sidebar slider
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2015, 2024);

/// A discrete sidebar filter token, classified at construction time.
///
/// Court and verdict tokens live in disjoint fixed vocabularies; an id that
/// belongs to neither parses to `None` and never reaches the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterToken {
    /// A court-level token, e.g. `supreme`
    Court(CourtLevel),
    /// A verdict token, e.g. `dismissed`
    Verdict(Verdict),
}

impl FilterToken {
    /// Resolve a sidebar token id against both vocabularies
    pub fn parse(id: &str) -> Option<Self> {
        CourtLevel::from_token(id)
            .map(FilterToken::Court)
            .or_else(|| Verdict::from_token(id).map(FilterToken::Verdict))
    }

    /// The sidebar id for this token
    pub fn id(&self) -> &'static str {
        match self {
            FilterToken::Court(court) => court.token(),
            FilterToken::Verdict(verdict) => verdict.token(),
        }
    }
}

/// The complete set of filter inputs for one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFilter {
    /// Free-text search term; empty means inactive
    pub search: String,
    /// Inclusive year bounds; an inverted range matches nothing
    pub year_range: (i32, i32),
    /// Active discrete filter tokens
    pub tokens: Vec<FilterToken>,
    /// Whether the expertise-relevance predicate is enabled
    pub relevance_only: bool,
    /// Lowercase expertise tags; relevance applies only when non-empty
    pub expertise_tags: HashSet<String>,
}

impl CaseFilter {
    /// A filter with the default year range and nothing else active
    pub fn new() -> Self {
        Self {
            year_range: DEFAULT_YEAR_RANGE,
            ..Self::default()
        }
    }

    /// Toggle a token by sidebar id; unknown ids are ignored.
    ///
    /// Returns whether the active set changed.
    pub fn toggle_token(&mut self, id: &str) -> bool {
        let Some(token) = FilterToken::parse(id) else {
            return false;
        };
        if let Some(pos) = self.tokens.iter().position(|t| *t == token) {
            self.tokens.remove(pos);
        } else {
            self.tokens.push(token);
        }
        true
    }

    /// Deactivate all discrete tokens and reset the year range
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.year_range = DEFAULT_YEAR_RANGE;
    }
}

/// Apply the combined predicate, returning the order-preserving
/// subsequence of matching cases.
pub fn filter_cases<'a>(cases: &'a [CaseRecord], filter: &CaseFilter) -> Vec<&'a CaseRecord> {
    let term = filter.search.trim().to_lowercase();

    let mut courts: Vec<CourtLevel> = Vec::new();
    let mut verdicts: Vec<Verdict> = Vec::new();
    for token in &filter.tokens {
        match token {
            FilterToken::Court(c) => courts.push(*c),
            FilterToken::Verdict(v) => verdicts.push(*v),
        }
    }

    let relevance_active = filter.relevance_only && !filter.expertise_tags.is_empty();

    cases
        .iter()
        .filter(|case| {
            if !term.is_empty() && !matches_search(case, &term) {
                return false;
            }
            if case.year < filter.year_range.0 || case.year > filter.year_range.1 {
                return false;
            }
            if !matches_tokens(case, &courts, &verdicts) {
                return false;
            }
            if relevance_active && !matches_expertise(case, &filter.expertise_tags) {
                return false;
            }
            true
        })
        .collect()
}

/// Case-insensitive substring match over name, citation, summary, court,
/// or any tag
fn matches_search(case: &CaseRecord, term: &str) -> bool {
    case.name.to_lowercase().contains(term)
        || case.citation.to_lowercase().contains(term)
        || case.summary.to_lowercase().contains(term)
        || case.court.as_str().to_lowercase().contains(term)
        || case.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

/// AND-across-groups rule for the discrete filters: when both groups are
/// active a case must match one token of each; a single active group must
/// match on its own; no active group is vacuously true.
fn matches_tokens(case: &CaseRecord, courts: &[CourtLevel], verdicts: &[Verdict]) -> bool {
    let court_ok = courts.contains(&case.court);
    let verdict_ok = verdicts.contains(&case.verdict);
    match (courts.is_empty(), verdicts.is_empty()) {
        (false, false) => court_ok && verdict_ok,
        (false, true) => court_ok,
        (true, false) => verdict_ok,
        (true, true) => true,
    }
}

fn matches_expertise(case: &CaseRecord, expertise_tags: &HashSet<String>) -> bool {
    case.tags
        .iter()
        .any(|tag| expertise_tags.contains(&tag.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexboard_domain::{CaseId, RawCase};

    fn case(id: &str, court: CourtLevel, verdict: Verdict, year: i32) -> CaseRecord {
        RawCase {
            id: CaseId::from(id),
            name: format!("Case {id}"),
            citation: format!("(2024) {id} SCC 1"),
            year,
            court,
            verdict,
            summary: "A summary.".to_string(),
            tags: vec!["Tax Law".to_string()],
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

    fn fixture() -> Vec<CaseRecord> {
        vec![
            case("a", CourtLevel::Supreme, Verdict::Allowed, 2020),
            case("b", CourtLevel::High, Verdict::Dismissed, 2023),
            case("c", CourtLevel::Supreme, Verdict::Dismissed, 2021),
        ]
    }

    fn ids(result: &[&CaseRecord]) -> Vec<String> {
        result.iter().map(|c| c.id.to_string()).collect()
    }

    fn with_tokens(token_ids: &[&str]) -> CaseFilter {
        let mut filter = CaseFilter::new();
        filter.year_range = (1900, 2099);
        for id in token_ids {
            filter.toggle_token(id);
        }
        filter
    }

    #[test]
    fn test_year_and_court_scenario() {
        // Spec scenario: yearRange [2019, 2021] + "supreme" selects only "a"
        let cases = vec![
            case("a", CourtLevel::Supreme, Verdict::Allowed, 2020),
            case("b", CourtLevel::High, Verdict::Dismissed, 2023),
        ];
        let mut filter = with_tokens(&["supreme"]);
        filter.year_range = (2019, 2021);
        assert_eq!(ids(&filter_cases(&cases, &filter)), vec!["a"]);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let cases = fixture();
        let filter = with_tokens(&[]);
        assert_eq!(filter_cases(&cases, &filter).len(), cases.len());
    }

    #[test]
    fn test_empty_collection_yields_empty_result() {
        let filter = with_tokens(&["supreme"]);
        assert!(filter_cases(&[], &filter).is_empty());
    }

    #[test]
    fn test_inverted_year_range_matches_nothing() {
        let cases = fixture();
        let mut filter = with_tokens(&[]);
        filter.year_range = (2024, 2015);
        assert!(filter_cases(&cases, &filter).is_empty());
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        let mut filter = with_tokens(&[]);
        assert!(!filter.toggle_token("affirmed"));
        assert!(filter.tokens.is_empty());
    }

    #[test]
    fn test_court_group_ors_within_itself() {
        let cases = fixture();
        let filter = with_tokens(&["supreme", "high"]);
        assert_eq!(ids(&filter_cases(&cases, &filter)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_and_across_groups() {
        let cases = fixture();
        let filter = with_tokens(&["supreme", "dismissed"]);
        assert_eq!(ids(&filter_cases(&cases, &filter)), vec!["c"]);
    }

    #[test]
    fn test_search_matches_tags_and_fields() {
        let cases = fixture();
        let mut filter = with_tokens(&[]);
        filter.search = "tax".to_string();
        assert_eq!(filter_cases(&cases, &filter).len(), 3);
        filter.search = "Case b".to_string();
        assert_eq!(ids(&filter_cases(&cases, &filter)), vec!["b"]);
        filter.search = "high court".to_string();
        assert_eq!(ids(&filter_cases(&cases, &filter)), vec!["b"]);
    }

    #[test]
    fn test_relevance_requires_non_empty_expertise() {
        let cases = fixture();
        let mut filter = with_tokens(&[]);
        filter.relevance_only = true;
        // No expertise tags: the relevance predicate is inactive
        assert_eq!(filter_cases(&cases, &filter).len(), 3);
        filter.expertise_tags = ["criminal law".to_string()].into_iter().collect();
        assert!(filter_cases(&cases, &filter).is_empty());
        filter.expertise_tags = ["tax law".to_string()].into_iter().collect();
        assert_eq!(filter_cases(&cases, &filter).len(), 3);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut filter = with_tokens(&[]);
        filter.toggle_token("supreme");
        filter.toggle_token("supreme");
        assert!(filter.tokens.is_empty());
    }

    #[test]
    fn test_filter_is_pure() {
        let cases = fixture();
        let filter = with_tokens(&["supreme", "dismissed"]);
        let first = ids(&filter_cases(&cases, &filter));
        let second = ids(&filter_cases(&cases, &filter));
        assert_eq!(first, second);
    }
}
