//! Comparison selection state machine
//!
//! A bounded multi-select of up to three cases for side-by-side comparison,
//! plus the superlative computations backing the comparison view. The
//! selection is session-scoped and never persisted.

use lexboard_domain::{CaseId, CaseRecord, CitationRisk};

/// Maximum number of cases in a comparison selection
pub const MAX_COMPARE: usize = 3;

/// Minimum selection size for which a comparison can open
pub const MIN_COMPARE: usize = 2;

/// An ordered selection of distinct cases chosen for comparison
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    cases: Vec<CaseRecord>,
}

impl ComparisonSelection {
    /// An empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a case in or out of the selection.
    ///
    /// Adding a fourth distinct case is a silent no-op; the UI is expected
    /// to reflect the full state proactively. Returns whether the selection
    /// changed.
    pub fn toggle(&mut self, case: &CaseRecord) -> bool {
        if let Some(pos) = self.cases.iter().position(|c| c.id == case.id) {
            self.cases.remove(pos);
            return true;
        }
        if self.cases.len() >= MAX_COMPARE {
            return false;
        }
        self.cases.push(case.clone());
        true
    }

    /// Remove a case by id; absent ids are a no-op
    pub fn remove(&mut self, case_id: &CaseId) -> bool {
        match self.cases.iter().position(|c| &c.id == case_id) {
            Some(pos) => {
                self.cases.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empty the selection unconditionally
    pub fn clear(&mut self) {
        self.cases.clear();
    }

    /// Whether the given case is currently selected
    pub fn is_selected(&self, case_id: &CaseId) -> bool {
        self.cases.iter().any(|c| &c.id == case_id)
    }

    /// The selected cases, in selection order
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Number of selected cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Whether the compare action is available (two or more selected)
    pub fn can_compare(&self) -> bool {
        self.cases.len() >= MIN_COMPARE
    }

    /// Whether the selection is at its bound
    pub fn is_full(&self) -> bool {
        self.cases.len() >= MAX_COMPARE
    }
}

/// Superlatives derived from a comparison selection.
///
/// A case is highlighted as strongest (or most cited) iff its value equals
/// the selection maximum and that maximum is positive, so an all-zero
/// column gets no highlight. When several cases tie, all carry the
/// highlight; the exemplar named in the narrative summary is the first
/// match in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary {
    /// Maximum precedent strength across the selection
    pub max_strength: u8,
    /// Maximum cited-by count across the selection
    pub max_cited: u32,
    /// First case (in selection order) at the maximum strength, if positive
    pub strongest: Option<CaseId>,
    /// First case (in selection order) at the maximum cited-by count, if positive
    pub most_cited: Option<CaseId>,
    /// How many selected cases are classified safe to cite
    pub safe_to_cite: usize,
    /// Total cases in the selection
    pub total: usize,
}

impl ComparisonSummary {
    /// Compute the summary; `None` unless the comparison can open
    /// (two or more cases selected).
    pub fn of(selection: &ComparisonSelection) -> Option<Self> {
        if !selection.can_compare() {
            return None;
        }
        let cases = selection.cases();
        let max_strength = cases.iter().map(|c| c.precedent_strength).max().unwrap_or(0);
        let max_cited = cases.iter().map(|c| c.cited_by_count).max().unwrap_or(0);
        let strongest = (max_strength > 0)
            .then(|| {
                cases
                    .iter()
                    .find(|c| c.precedent_strength == max_strength)
                    .map(|c| c.id.clone())
            })
            .flatten();
        let most_cited = (max_cited > 0)
            .then(|| {
                cases
                    .iter()
                    .find(|c| c.cited_by_count == max_cited)
                    .map(|c| c.id.clone())
            })
            .flatten();
        Some(Self {
            max_strength,
            max_cited,
            strongest,
            most_cited,
            safe_to_cite: cases
                .iter()
                .filter(|c| c.citation_risk == CitationRisk::Safe)
                .count(),
            total: cases.len(),
        })
    }

    /// Whether this case carries the "strongest" highlight
    pub fn is_strongest(&self, case: &CaseRecord) -> bool {
        self.max_strength > 0 && case.precedent_strength == self.max_strength
    }

    /// Whether this case carries the "most cited" highlight
    pub fn is_most_cited(&self, case: &CaseRecord) -> bool {
        self.max_cited > 0 && case.cited_by_count == self.max_cited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexboard_domain::{CourtLevel, RawCase, Verdict};

    fn case(id: &str, strength: i64, cited: i64) -> CaseRecord {
        RawCase {
            id: CaseId::from(id),
            name: format!("Case {id}"),
            citation: "Cite".to_string(),
            year: 2020,
            court: CourtLevel::Supreme,
            verdict: Verdict::Allowed,
            summary: "Summary".to_string(),
            tags: vec![],
            precedent_strength: Some(strength),
            citation_risk: None,
            outcome_alignment: None,
            ratio_decidendi: None,
            cited_by_count: Some(cited),
            created_at: 0,
            created_by: None,
        }
        .normalize()
    }

    #[test]
    fn test_selection_caps_at_three() {
        let mut sel = ComparisonSelection::new();
        assert!(sel.toggle(&case("a", 80, 0)));
        assert!(sel.toggle(&case("b", 90, 0)));
        assert!(sel.toggle(&case("c", 70, 0)));
        // Fourth distinct toggle is a silent no-op
        assert!(!sel.toggle(&case("d", 60, 0)));
        assert_eq!(sel.len(), MAX_COMPARE);
        assert!(!sel.is_selected(&CaseId::from("d")));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut sel = ComparisonSelection::new();
        let a = case("a", 80, 0);
        sel.toggle(&a);
        assert!(sel.is_selected(&a.id));
        sel.toggle(&a);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_out_frees_a_slot() {
        let mut sel = ComparisonSelection::new();
        sel.toggle(&case("a", 80, 0));
        sel.toggle(&case("b", 90, 0));
        sel.toggle(&case("c", 70, 0));
        sel.toggle(&case("b", 90, 0));
        assert!(sel.toggle(&case("d", 60, 0)));
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut sel = ComparisonSelection::new();
        sel.toggle(&case("a", 80, 0));
        sel.toggle(&case("b", 90, 0));
        assert!(sel.remove(&CaseId::from("a")));
        assert!(!sel.remove(&CaseId::from("zz")));
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_compare_gate() {
        let mut sel = ComparisonSelection::new();
        sel.toggle(&case("a", 80, 0));
        assert!(!sel.can_compare());
        assert_eq!(ComparisonSummary::of(&sel), None);
        sel.toggle(&case("b", 90, 0));
        assert!(sel.can_compare());
        assert!(ComparisonSummary::of(&sel).is_some());
    }

    #[test]
    fn test_tied_maximum_flags_both_names_first() {
        // Spec scenario: [A(80), B(95), C(95)] -> max 95, B and C both
        // highlighted, B is the exemplar
        let mut sel = ComparisonSelection::new();
        let a = case("a", 80, 0);
        let b = case("b", 95, 0);
        let c = case("c", 95, 0);
        sel.toggle(&a);
        sel.toggle(&b);
        sel.toggle(&c);

        let summary = ComparisonSummary::of(&sel).unwrap();
        assert_eq!(summary.max_strength, 95);
        assert!(!summary.is_strongest(&a));
        assert!(summary.is_strongest(&b));
        assert!(summary.is_strongest(&c));
        assert_eq!(summary.strongest, Some(CaseId::from("b")));
    }

    #[test]
    fn test_all_zero_selection_has_no_highlight() {
        let mut sel = ComparisonSelection::new();
        let a = case("a", 0, 0);
        let b = case("b", 0, 0);
        sel.toggle(&a);
        sel.toggle(&b);

        let summary = ComparisonSummary::of(&sel).unwrap();
        assert_eq!(summary.max_strength, 0);
        assert_eq!(summary.strongest, None);
        assert_eq!(summary.most_cited, None);
        assert!(!summary.is_strongest(&a));
        assert!(!summary.is_most_cited(&b));
    }

    #[test]
    fn test_most_cited_exemplar() {
        let mut sel = ComparisonSelection::new();
        sel.toggle(&case("a", 10, 40));
        sel.toggle(&case("b", 20, 12));
        let summary = ComparisonSummary::of(&sel).unwrap();
        assert_eq!(summary.max_cited, 40);
        assert_eq!(summary.most_cited, Some(CaseId::from("a")));
    }

    #[test]
    fn test_safe_to_cite_count() {
        let mut sel = ComparisonSelection::new();
        sel.toggle(&case("a", 10, 0));
        sel.toggle(&case("b", 20, 0));
        // Both default to safe under normalization
        let summary = ComparisonSummary::of(&sel).unwrap();
        assert_eq!(summary.safe_to_cite, 2);
        assert_eq!(summary.total, 2);
    }
}
