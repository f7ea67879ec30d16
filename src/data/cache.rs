use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::errors::Result;
use super::loader;
use super::model::JobDataset;

// ---------------------------------------------------------------------------
// DatasetCache – read-through, path-keyed, no eviction
// ---------------------------------------------------------------------------

/// Memoizing dataset cache: populate on miss, reuse forever.
///
/// Keys are the literal path arguments (no canonicalization), so two
/// spellings of the same file load twice. A file that changes on disk
/// behind a cached path is not noticed. Only successful loads are cached;
/// a failed load is retried on the next call.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<JobDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset behind `path`, loading it on first request.
    pub fn read(&mut self, path: &Path) -> Result<Arc<JobDataset>> {
        if let Some(dataset) = self.entries.get(path) {
            log::debug!("cache hit for '{}'", path.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(loader::load_file(path)?);
        log::info!("loaded {} jobs from '{}'", dataset.len(), path.display());
        self.entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_CSV: &str = "\
job_type,industry,min_salary,max_salary
FULL_TIME,IT,2000,3000
";

    #[test]
    fn test_read_through_and_reuse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(&path, SAMPLE_CSV).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.read(&path).unwrap();
        let second = cache.read(&path).unwrap();

        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cached_dataset_survives_file_deletion() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(&path, SAMPLE_CSV).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.read(&path).unwrap();

        // The file is gone, so a second read can only come from the cache.
        fs::remove_file(&path).unwrap();
        let second = cache.read(&path).unwrap();

        assert_eq!(first.jobs, second.jobs);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("late.csv");

        let mut cache = DatasetCache::new();
        assert!(cache.read(&path).is_err());
        assert!(cache.is_empty());

        fs::write(&path, SAMPLE_CSV).unwrap();
        let dataset = cache.read(&path).unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
