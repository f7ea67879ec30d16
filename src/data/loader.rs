use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::errors::{InsightError, Result};
use super::model::{Job, JobDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a job dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming the columns, one job per line
/// * `.json` – `[{ "job_type": "...", "min_salary": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<JobDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(InsightError::Format(format!(
            "unsupported file extension: .{other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: first line is the header, every following line one job with
/// fields positionally aligned to the header. A row whose field count
/// disagrees with the header aborts the load.
fn load_csv(path: &Path) -> Result<JobDataset> {
    let file = File::open(path).map_err(|e| InsightError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| InsightError::Format(format!("reading header row: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(InsightError::Format("missing header row".into()));
    }

    let mut jobs = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| InsightError::Format(format!("row {row_no}: {e}")))?;

        let mut job = Job::default();
        for (col_idx, value) in record.iter().enumerate() {
            job.insert(&headers[col_idx], value.to_string());
        }
        jobs.push(job);
    }

    Ok(JobDataset::from_jobs(headers, jobs))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "job_type": "FULL_TIME",
///     "industry": "IT",
///     "min_salary": "2000",
///     "max_salary": "3000"
///   },
///   ...
/// ]
/// ```
///
/// Scalar non-string values are kept as their text form; a `null` value
/// counts as an absent key. Nested arrays/objects are rejected.
fn load_json(path: &Path) -> Result<JobDataset> {
    let text = std::fs::read_to_string(path).map_err(|e| InsightError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    let root: JsonValue = serde_json::from_str(&text)
        .map_err(|e| InsightError::Format(format!("parsing JSON: {e}")))?;

    let records = root
        .as_array()
        .ok_or_else(|| InsightError::Format("expected top-level JSON array".into()))?;

    let mut columns: BTreeSet<String> = BTreeSet::new();
    let mut jobs = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| InsightError::Format(format!("row {i} is not a JSON object")))?;

        let mut job = Job::default();
        for (key, val) in obj {
            let text = match val {
                JsonValue::Null => continue, // null → absent key
                JsonValue::String(s) => s.clone(),
                JsonValue::Number(n) => n.to_string(),
                JsonValue::Bool(b) => b.to_string(),
                JsonValue::Array(_) | JsonValue::Object(_) => {
                    return Err(InsightError::Format(format!(
                        "row {i}, field '{key}': expected a scalar"
                    )));
                }
            };
            columns.insert(key.clone());
            job.insert(key, text);
        }
        jobs.push(job);
    }

    Ok(JobDataset::from_jobs(columns.into_iter().collect(), jobs))
}
