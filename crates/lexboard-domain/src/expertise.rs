//! Expertise-to-tag mapping
//!
//! A user's declared practice areas are translated through a fixed lookup
//! table into the lowercase tag vocabulary used for relevance filtering.
//! The mapping is recomputed on every filter pass; nothing derived from it
//! is persisted.

use std::collections::HashSet;

/// Static practice-area to topic-tag table.
///
/// Areas missing from the table fall back to their own lowercased name, so
/// a newly added practice area still matches identically named tags.
const EXPERTISE_TAG_MAP: &[(&str, &[&str])] = &[
    ("Constitutional Law", &["constitutional law", "fundamental rights"]),
    ("Criminal Law", &["criminal law", "evidence", "bail"]),
    ("Tax Law", &["tax law", "taxation", "gst"]),
    ("Corporate Law", &["corporate law", "company law", "insolvency"]),
    ("Banking Law", &["banking law", "finance", "recovery"]),
    ("Environmental Law", &["environmental law", "pollution"]),
    ("Intellectual Property", &["intellectual property", "patents", "trademarks"]),
    ("Labour Law", &["labour law", "employment", "industrial disputes"]),
    ("Family Law", &["family law", "custody", "maintenance"]),
    ("Property Law", &["property law", "land acquisition", "tenancy"]),
];

/// A user's selected practice areas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertiseProfile {
    areas: Vec<String>,
}

impl ExpertiseProfile {
    /// Build a profile from declared practice areas
    pub fn new(areas: Vec<String>) -> Self {
        Self { areas }
    }

    /// The declared practice areas, as selected
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Whether the user declared any practice area
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// The lowercase topic tags this profile makes relevant
    pub fn relevance_tags(&self) -> HashSet<String> {
        let mut tags = HashSet::new();
        for area in &self.areas {
            match EXPERTISE_TAG_MAP.iter().find(|(name, _)| name.eq_ignore_ascii_case(area)) {
                Some((_, mapped)) => tags.extend(mapped.iter().map(|t| t.to_string())),
                None => {
                    tags.insert(area.to_lowercase());
                }
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_area_maps_to_tag_set() {
        let profile = ExpertiseProfile::new(vec!["Tax Law".to_string()]);
        let tags = profile.relevance_tags();
        assert!(tags.contains("tax law"));
        assert!(tags.contains("taxation"));
        assert!(!tags.contains("criminal law"));
    }

    #[test]
    fn test_unknown_area_falls_back_to_lowercase_name() {
        let profile = ExpertiseProfile::new(vec!["Maritime Law".to_string()]);
        assert!(profile.relevance_tags().contains("maritime law"));
    }

    #[test]
    fn test_areas_combine() {
        let profile =
            ExpertiseProfile::new(vec!["Tax Law".to_string(), "Banking Law".to_string()]);
        let tags = profile.relevance_tags();
        assert!(tags.contains("taxation"));
        assert!(tags.contains("banking law"));
    }

    #[test]
    fn test_empty_profile_yields_no_tags() {
        assert!(ExpertiseProfile::default().relevance_tags().is_empty());
    }
}
