//! Default-file cache.
//!
//! Configuration names a default spreadsheet; this cache resolves it once and
//! serves the parsed rows thereafter. Changing the source or editing the file
//! requires an explicit `invalidate()` (or `set_path`, which invalidates) —
//! there is no implicit global state. A missing file is served as an empty
//! row set, matching the contract that collaborators degrade to empty rather
//! than fail into the engine.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use vitrolead_common::RawRecord;

use crate::sources::spreadsheet::read_csv_path;

#[derive(Debug)]
struct CacheState {
    path: PathBuf,
    rows: Option<Arc<Vec<RawRecord>>>,
    loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct DefaultFileCache {
    state: Mutex<CacheState>,
}

impl DefaultFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            state: Mutex::new(CacheState {
                path: path.into(),
                rows: None,
                loaded_at: None,
            }),
        }
    }

    /// Return the cached rows, loading the file on first use.
    pub fn load(&self) -> Arc<Vec<RawRecord>> {
        let mut state = self.state.lock().expect("cache lock poisoned");
        if let Some(rows) = &state.rows {
            return Arc::clone(rows);
        }

        let rows = match read_csv_path(&state.path) {
            Ok(rows) => {
                debug!(path = %state.path.display(), count = rows.len(), "default file loaded");
                rows
            }
            Err(e) => {
                warn!(path = %state.path.display(), error = %e, "default file unavailable, serving empty set");
                Vec::new()
            }
        };

        let rows = Arc::new(rows);
        state.rows = Some(Arc::clone(&rows));
        state.loaded_at = Some(Utc::now());
        rows
    }

    /// Drop the cached rows; the next `load` re-reads the file.
    pub fn invalidate(&self) {
        let mut state = self.state.lock().expect("cache lock poisoned");
        state.rows = None;
        state.loaded_at = None;
    }

    /// Point the cache at a different file. Invalidates.
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        let mut state = self.state.lock().expect("cache lock poisoned");
        state.path = path.into();
        state.rows = None;
        state.loaded_at = None;
    }

    /// When the current contents were read, if loaded.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.state.lock().expect("cache lock poisoned").loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_caches_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "leads.csv", "Name\nAsha\n");
        let cache = DefaultFileCache::new(&path);

        assert_eq!(cache.load().len(), 1);
        assert!(cache.loaded_at().is_some());

        // File grows, but the cache still serves the old contents.
        std::fs::write(&path, "Name\nAsha\nLukas\n").unwrap();
        assert_eq!(cache.load().len(), 1);

        cache.invalidate();
        assert_eq!(cache.load().len(), 2);
    }

    #[test]
    fn test_missing_file_serves_empty() {
        let cache = DefaultFileCache::new("/nonexistent/leads.csv");
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_set_path_invalidates() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_csv(&dir, "a.csv", "Name\nA\n");
        let b = write_csv(&dir, "b.csv", "Name\nB1\nB2\n");

        let cache = DefaultFileCache::new(&a);
        assert_eq!(cache.load().len(), 1);
        cache.set_path(&b);
        assert_eq!(cache.load().len(), 2);
    }
}
