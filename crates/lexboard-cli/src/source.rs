//! Case loading for commands that operate on the collection.
//!
//! Commands accept either a local JSON file of raw case rows or, by
//! default, the remote store named by the active profile. Rows are
//! normalized on entry either way.

use crate::config::Config;
use crate::error::Result;
use lexboard_domain::traits::CaseStore;
use lexboard_domain::{CaseRecord, RawCase};
use lexboard_store::RestStore;
use std::fs;

/// Load and normalize cases from a JSON file holding an array of rows.
pub fn load_cases_from_file(path: &str) -> Result<Vec<CaseRecord>> {
    let contents = fs::read_to_string(path)?;
    let rows: Vec<RawCase> = serde_json::from_str(&contents)?;
    Ok(rows.into_iter().map(RawCase::normalize).collect())
}

/// Build a store client from the active profile.
pub fn store_from(config: &Config) -> Result<RestStore> {
    let profile = config.get_active_profile()?;
    Ok(RestStore::new(&profile.store_url, &profile.api_key)?)
}

/// Load cases from the given file, or from the remote store when no file
/// is given.
pub async fn load_cases(file: Option<&str>, config: &Config) -> Result<Vec<CaseRecord>> {
    match file {
        Some(path) => load_cases_from_file(path),
        None => {
            let store = store_from(config)?;
            Ok(store.list_cases().await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_cases_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "c1",
                "name": "Smith v. State",
                "citation": "(2024) 5 SCC 1",
                "year": 2024,
                "court": "Supreme Court",
                "verdict": "Allowed",
                "summary": "A summary.",
                "tags": ["Tax Law", "tax law"]
            }}]"#
        )
        .unwrap();

        let cases = load_cases_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cases.len(), 1);
        // Normalization applied on entry
        assert_eq!(cases[0].tags, vec!["Tax Law"]);
        assert_eq!(cases[0].precedent_strength, 75);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_cases_from_file(file.path().to_str().unwrap()).is_err());
    }
}
