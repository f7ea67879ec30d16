use super::errors::{InsightError, Result};
use super::model::{Job, MAX_SALARY, MIN_SALARY, SALARY_UNKNOWN};

// ---------------------------------------------------------------------------
// Salary text → amount
// ---------------------------------------------------------------------------

/// Parse a salary cell into a non-negative amount.
///
/// Only a plain run of ASCII digits qualifies: signs, decimal points,
/// whitespace, and empty text are all rejected, as are runs of digits too
/// large for `u64`.
fn parse_amount(field: &'static str, raw: &str) -> Result<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InsightError::InvalidFormat {
            field,
            value: raw.to_string(),
        });
    }
    raw.parse::<u64>().map_err(|_| InsightError::InvalidFormat {
        field,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Amounts of `field` across all jobs that carry a usable value.
///
/// Absent keys, empty cells, and the "salary unknown" placeholder are
/// skipped silently; any other non-numeric text is an error, not a skip.
fn usable_amounts(jobs: &[Job], field: &'static str) -> Result<Vec<u64>> {
    let mut amounts = Vec::new();
    for job in jobs {
        let Some(raw) = job.field(field) else {
            continue;
        };
        if raw.is_empty() || raw == SALARY_UNKNOWN {
            continue;
        }
        amounts.push(parse_amount(field, raw)?);
    }
    Ok(amounts)
}

/// Smallest lower salary bound across the dataset.
pub fn min_salary(jobs: &[Job]) -> Result<u64> {
    usable_amounts(jobs, MIN_SALARY)?
        .into_iter()
        .min()
        .ok_or(InsightError::EmptyResult(MIN_SALARY))
}

/// Largest upper salary bound across the dataset.
pub fn max_salary(jobs: &[Job]) -> Result<u64> {
    usable_amounts(jobs, MAX_SALARY)?
        .into_iter()
        .max()
        .ok_or(InsightError::EmptyResult(MAX_SALARY))
}

// ---------------------------------------------------------------------------
// Range matching
// ---------------------------------------------------------------------------

/// Validated salary bounds of a single job.
///
/// Checks run in a fixed order, each with its own error: both keys present,
/// both values digit-valid, bounds not inverted.
fn salary_bounds(job: &Job) -> Result<(u64, u64)> {
    let min_raw = job
        .min_salary
        .as_deref()
        .ok_or(InsightError::MissingField(MIN_SALARY))?;
    let max_raw = job
        .max_salary
        .as_deref()
        .ok_or(InsightError::MissingField(MAX_SALARY))?;

    let min = parse_amount(MIN_SALARY, min_raw)?;
    let max = parse_amount(MAX_SALARY, max_raw)?;

    if min > max {
        return Err(InsightError::InvalidRange { min, max });
    }
    Ok((min, max))
}

/// Whether `salary` falls inside the job's salary range, both ends
/// inclusive.
///
/// Strict form: any validation failure on the record surfaces as an error.
/// A negative query salary is simply out of range (bounds are
/// non-negative).
pub fn matches_salary_range(job: &Job, salary: i64) -> Result<bool> {
    let (min, max) = salary_bounds(job)?;
    Ok(salary >= 0 && min <= salary as u64 && salary as u64 <= max)
}

/// Jobs whose salary range contains `salary`.
///
/// Lenient form: a best-effort scan over possibly dirty data. A record that
/// fails any validation step counts as "no match" and is dropped, in
/// contrast to [`matches_salary_range`], which refuses such records loudly.
/// The asymmetry is contractual.
pub fn filter_by_salary_range(jobs: &[Job], salary: i64) -> Vec<Job> {
    jobs.iter()
        .filter(|job| matches_salary_range(job, salary).unwrap_or(false))
        .cloned()
        .collect()
}
