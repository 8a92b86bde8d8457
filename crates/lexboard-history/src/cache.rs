//! Local key-value cache implementations
//!
//! [`FileCache`] persists a flat string map as one JSON file, standing in
//! for browser local storage. [`MemoryCache`] backs tests and ephemeral
//! sessions.

use lexboard_domain::traits::LocalCache;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Cache key for the viewed-tags list
pub const VIEWED_TAGS_KEY: &str = "legal_viewed_tags";

/// Cache key for the viewed-case-id list
pub const VIEWED_CASES_KEY: &str = "legal_viewed_cases";

/// Cache key for the pre-session sign-up draft
pub const SIGNUP_DRAFT_KEY: &str = "legal_signup_draft";

/// Errors from the file-backed cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem error
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file holds something other than a string map
    #[error("cache file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A JSON-file-backed string cache.
///
/// The whole map is rewritten on every mutation; the payloads here are a
/// few hundred bytes, so simplicity wins over incremental writes.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileCache {
    /// Open the cache at `path`, loading existing entries if present.
    ///
    /// A corrupt file is reported as an error; callers in the tracker treat
    /// that as an empty cache.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl LocalCache for FileCache {
    type Error = CacheError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// An in-memory string cache for tests and anonymous throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: HashMap<String, String>,
}

impl MemoryCache {
    /// An empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalCache for MemoryCache {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_cache_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::open(&path).unwrap();
        cache.set(VIEWED_TAGS_KEY, "[\"Tax Law\"]").unwrap();
        drop(cache);

        let cache = FileCache::open(&path).unwrap();
        assert_eq!(
            cache.get(VIEWED_TAGS_KEY).unwrap(),
            Some("[\"Tax Law\"]".to_string())
        );
        assert_eq!(cache.get("missing").unwrap(), None);
    }

    #[test]
    fn test_file_cache_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::open(&path).unwrap();
        cache.set("k", "v").unwrap();
        cache.remove("k").unwrap();
        cache.remove("never-existed").unwrap();
        assert_eq!(cache.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_cache_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "not json").unwrap();
        assert!(FileCache::open(&path).is_err());
    }
}
