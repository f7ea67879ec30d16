use std::collections::BTreeSet;

use super::model::{Job, JobDataset, INDUSTRY, JOB_TYPE};

// ---------------------------------------------------------------------------
// Distinct-value extraction
// ---------------------------------------------------------------------------

/// Distinct non-empty values of `field` across the dataset.
///
/// Backed by the index built at load; a field no record carries yields the
/// empty set.
pub fn distinct_values(dataset: &JobDataset, field: &str) -> BTreeSet<String> {
    dataset
        .unique_values
        .get(field)
        .cloned()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Equality filters
// ---------------------------------------------------------------------------

/// Jobs whose `field` equals `value` exactly, original order preserved.
///
/// Exact string equality: no case folding, no coercion. Absent fields never
/// match. Empty input or zero matches gives an empty vec, never an error.
pub fn filter_by_field(jobs: &[Job], field: &str, value: &str) -> Vec<Job> {
    jobs.iter()
        .filter(|job| job.field(field) == Some(value))
        .cloned()
        .collect()
}

/// Jobs with the given `job_type`.
pub fn filter_by_job_type(jobs: &[Job], job_type: &str) -> Vec<Job> {
    filter_by_field(jobs, JOB_TYPE, job_type)
}

/// Jobs in the given `industry`.
pub fn filter_by_industry(jobs: &[Job], industry: &str) -> Vec<Job> {
    filter_by_field(jobs, INDUSTRY, industry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MIN_SALARY;

    fn job(pairs: &[(&str, &str)]) -> Job {
        let mut j = Job::default();
        for (name, value) in pairs {
            j.insert(name, value.to_string());
        }
        j
    }

    fn sample() -> Vec<Job> {
        vec![
            job(&[(JOB_TYPE, "FULL_TIME"), (INDUSTRY, "IT")]),
            job(&[(JOB_TYPE, "PART_TIME"), (INDUSTRY, "IT")]),
            job(&[(JOB_TYPE, "FULL_TIME"), (INDUSTRY, "Finance")]),
            job(&[(INDUSTRY, "Finance")]),
        ]
    }

    #[test]
    fn test_distinct_values_excludes_missing_and_empty() {
        let mut jobs = sample();
        jobs.push(job(&[(JOB_TYPE, ""), (INDUSTRY, "IT")]));
        let dataset = JobDataset::from_jobs(vec![JOB_TYPE.into(), INDUSTRY.into()], jobs);

        let types = distinct_values(&dataset, JOB_TYPE);
        assert_eq!(types.len(), 2);
        assert!(types.contains("FULL_TIME"));
        assert!(types.contains("PART_TIME"));
    }

    #[test]
    fn test_distinct_values_unknown_field_is_empty() {
        let dataset = JobDataset::from_jobs(vec![JOB_TYPE.into()], sample());
        assert!(distinct_values(&dataset, "salary_currency").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let jobs = sample();
        let full_time = filter_by_job_type(&jobs, "FULL_TIME");

        assert_eq!(full_time.len(), 2);
        assert_eq!(full_time[0].field(INDUSTRY), Some("IT"));
        assert_eq!(full_time[1].field(INDUSTRY), Some("Finance"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let jobs = sample();
        let once = filter_by_industry(&jobs, "IT");
        let twice = filter_by_industry(&once, "IT");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let jobs = sample();
        assert!(filter_by_job_type(&jobs, "full_time").is_empty());
    }

    #[test]
    fn test_filter_missing_field_matches_nothing() {
        let jobs = sample();
        assert!(filter_by_field(&jobs, MIN_SALARY, "1000").is_empty());
        assert!(filter_by_field(&[], JOB_TYPE, "FULL_TIME").is_empty());
    }

    #[test]
    fn test_filter_skips_records_lacking_the_field() {
        let jobs = sample();
        let finance = filter_by_industry(&jobs, "Finance");
        // Last sample record has no job_type but still matches by industry.
        assert_eq!(finance.len(), 2);
        assert_eq!(finance[1].field(JOB_TYPE), None);
    }
}
