use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::data::errors::Result;
use crate::data::filter;
use crate::data::model::{JobDataset, INDUSTRY, JOB_TYPE};
use crate::data::salary;

// ---------------------------------------------------------------------------
// Insights – path-level query front-end
// ---------------------------------------------------------------------------

/// Answers questions about the dataset behind a path.
///
/// Owns the read cache, so repeated queries against the same path parse the
/// file once. Record-level operations (equality filters, range matching)
/// live in [`crate::data::filter`] and [`crate::data::salary`] as pure
/// functions; this type covers everything keyed by path.
#[derive(Debug, Default)]
pub struct Insights {
    cache: DatasetCache,
}

impl Insights {
    pub fn new() -> Self {
        Self::default()
    }

    /// The (cached) dataset behind `path`.
    pub fn read(&mut self, path: &Path) -> Result<Arc<JobDataset>> {
        self.cache.read(path)
    }

    /// Distinct non-empty values of `field` across the dataset.
    pub fn distinct_values(&mut self, path: &Path, field: &str) -> Result<BTreeSet<String>> {
        let dataset = self.cache.read(path)?;
        Ok(filter::distinct_values(&dataset, field))
    }

    /// All job types present in the dataset.
    pub fn distinct_job_types(&mut self, path: &Path) -> Result<BTreeSet<String>> {
        self.distinct_values(path, JOB_TYPE)
    }

    /// All industries present in the dataset.
    pub fn distinct_industries(&mut self, path: &Path) -> Result<BTreeSet<String>> {
        self.distinct_values(path, INDUSTRY)
    }

    /// Smallest lower salary bound in the dataset.
    pub fn min_salary(&mut self, path: &Path) -> Result<u64> {
        let dataset = self.cache.read(path)?;
        salary::min_salary(&dataset.jobs)
    }

    /// Largest upper salary bound in the dataset.
    pub fn max_salary(&mut self, path: &Path) -> Result<u64> {
        let dataset = self.cache.read(path)?;
        salary::max_salary(&dataset.jobs)
    }
}
