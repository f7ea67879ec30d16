use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// InsightError – everything that can go wrong between a path and an answer
// ---------------------------------------------------------------------------

/// Errors surfaced by the loader, the aggregations, and the strict
/// single-record range check.
///
/// The bulk range filter never returns these: a record failing validation
/// there is excluded from the result instead.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The dataset file could not be opened or read.
    #[error("cannot read dataset '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content does not have the expected shape
    /// (missing header, ragged row, unsupported extension, bad JSON).
    #[error("malformed dataset: {0}")]
    Format(String),

    /// An aggregation found no record with a usable value for the field.
    #[error("no record carries a usable '{0}' value")]
    EmptyResult(&'static str),

    /// A record lacks a field the operation requires.
    #[error("record has no '{0}' field")]
    MissingField(&'static str),

    /// A present, non-sentinel value is not a non-negative base-10 integer.
    #[error("'{value}' is not a valid '{field}' amount")]
    InvalidFormat { field: &'static str, value: String },

    /// A record's salary bounds are inverted.
    #[error("inverted salary range: min {min} exceeds max {max}")]
    InvalidRange { min: u64, max: u64 },
}

/// Result alias used throughout the data layer.
pub type Result<T> = std::result::Result<T, InsightError>;
