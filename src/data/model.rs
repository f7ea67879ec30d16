use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Field names with dedicated handling
// ---------------------------------------------------------------------------

pub const JOB_TYPE: &str = "job_type";
pub const INDUSTRY: &str = "industry";
pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";

/// Placeholder value meaning "salary unknown", distinct from an absent or
/// empty cell.
pub const SALARY_UNKNOWN: &str = "invalid";

// ---------------------------------------------------------------------------
// Job – one row of the dataset
// ---------------------------------------------------------------------------

/// A single job listing (one row of the source file).
///
/// The two salary bounds are typed out of the generic field map because the
/// salary logic needs to distinguish "the key never existed" (`None`) from
/// "the cell is present but empty or unusable" (`Some`). Every other column
/// stays name → raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Job {
    /// Lower salary bound, raw text. `None` only when the source had no
    /// such key at all.
    pub min_salary: Option<String>,
    /// Upper salary bound, raw text. Same absence rule as `min_salary`.
    pub max_salary: Option<String>,
    /// Remaining columns: column_name → raw value (empty cells kept).
    pub fields: BTreeMap<String, String>,
}

impl Job {
    /// Store a raw value under its column name, routing the salary bounds
    /// into their typed slots.
    pub fn insert(&mut self, name: &str, value: String) {
        match name {
            MIN_SALARY => self.min_salary = Some(value),
            MAX_SALARY => self.max_salary = Some(value),
            _ => {
                self.fields.insert(name.to_string(), value);
            }
        }
    }

    /// Look up a field by column name, salary bounds included.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            MIN_SALARY => self.min_salary.as_deref(),
            MAX_SALARY => self.max_salary.as_deref(),
            _ => self.fields.get(name).map(String::as_str),
        }
    }
}

// ---------------------------------------------------------------------------
// JobDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with a pre-computed distinct-value index.
#[derive(Debug, Clone)]
pub struct JobDataset {
    /// All jobs, in source-file order.
    pub jobs: Vec<Job>,
    /// Column names, in header order.
    pub column_names: Vec<String>,
    /// For each column the sorted set of distinct non-empty values.
    pub unique_values: BTreeMap<String, BTreeSet<String>>,
}

impl JobDataset {
    /// Build the distinct-value index from the loaded jobs.
    ///
    /// Absent keys and empty cells contribute nothing to the index.
    pub fn from_jobs(column_names: Vec<String>, jobs: Vec<Job>) -> Self {
        let mut unique_values: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for job in &jobs {
            for col in &column_names {
                match job.field(col) {
                    Some(val) if !val.is_empty() => {
                        unique_values
                            .entry(col.clone())
                            .or_default()
                            .insert(val.to_string());
                    }
                    _ => {}
                }
            }
        }
        JobDataset {
            jobs,
            column_names,
            unique_values,
        }
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
