//! Command implementations.

use crate::config::Config;
use crate::error::Result;
use lexboard_history::{FileCache, HistoryTracker, NullViewStore};
use std::sync::Arc;

pub mod add;
pub mod analyze;
pub mod compare;
pub mod history;
pub mod profile;
pub mod recommend;
pub mod search;
pub mod view;

pub use self::add::execute_add;
pub use self::analyze::execute_analyze;
pub use self::compare::execute_compare;
pub use self::history::execute_history;
pub use self::profile::execute_profile;
pub use self::recommend::execute_recommend;
pub use self::search::execute_search;
pub use self::view::execute_view;

/// Open the local-only view-history tracker backed by the CLI cache file.
pub(crate) async fn local_tracker() -> Result<HistoryTracker<NullViewStore, FileCache>> {
    let cache = FileCache::open(Config::cache_path()?)?;
    let mut tracker = HistoryTracker::new(Arc::new(NullViewStore), cache, None);
    tracker.initialize().await;
    Ok(tracker)
}
