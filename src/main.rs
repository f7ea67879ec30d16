use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use job_insights::data::errors::InsightError;
use job_insights::data::{filter, salary};
use job_insights::{Insights, Job};

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

const USAGE: &str =
    "usage: job-insights <dataset.{csv,json}> [salary] [--job-type T] [--industry I] [--json]";

#[derive(Debug, Default)]
struct Args {
    path: String,
    salary: Option<i64>,
    job_type: Option<String>,
    industry: Option<String>,
    json: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut positional: Vec<String> = Vec::new();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--job-type" => {
                args.job_type = Some(argv.next().context("--job-type needs a value")?);
            }
            "--industry" => {
                args.industry = Some(argv.next().context("--industry needs a value")?);
            }
            other if other.starts_with("--") => bail!("unknown option '{other}'\n{USAGE}"),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    args.path = positional.next().with_context(|| USAGE.to_string())?;
    args.salary = positional
        .next()
        .map(|s| s.parse::<i64>())
        .transpose()
        .context("salary must be an integer")?;
    if positional.next().is_some() {
        bail!("too many arguments\n{USAGE}");
    }
    Ok(args)
}

// ---------------------------------------------------------------------------
// Report – what the CLI prints for a dataset
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Report {
    path: String,
    jobs: usize,
    job_types: Vec<String>,
    industries: Vec<String>,
    /// `None` when no record carries a usable bound.
    min_salary: Option<u64>,
    max_salary: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_jobs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_salary: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matching_jobs: Option<usize>,
}

fn build_report(insights: &mut Insights, args: &Args) -> Result<Report> {
    let path = Path::new(&args.path);
    let dataset = insights.read(path)?;

    // Narrow the job list by the categorical selectors before any salary
    // matching, so the two compose.
    let mut selection: Vec<Job> = dataset.jobs.clone();
    if let Some(job_type) = &args.job_type {
        selection = filter::filter_by_job_type(&selection, job_type);
    }
    if let Some(industry) = &args.industry {
        selection = filter::filter_by_industry(&selection, industry);
    }
    let selected_jobs =
        (args.job_type.is_some() || args.industry.is_some()).then(|| selection.len());

    let matching_jobs = args
        .salary
        .map(|s| salary::filter_by_salary_range(&selection, s).len());

    Ok(Report {
        path: args.path.clone(),
        jobs: dataset.len(),
        job_types: insights.distinct_job_types(path)?.into_iter().collect(),
        industries: insights.distinct_industries(path)?.into_iter().collect(),
        min_salary: optional_bound(insights.min_salary(path))?,
        max_salary: optional_bound(insights.max_salary(path))?,
        selected_jobs,
        query_salary: args.salary,
        matching_jobs,
    })
}

/// A dataset without a single usable bound still gets a report; every other
/// aggregation failure is fatal.
fn optional_bound(bound: job_insights::Result<u64>) -> Result<Option<u64>> {
    match bound {
        Ok(v) => Ok(Some(v)),
        Err(InsightError::EmptyResult(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn print_report(report: &Report) {
    println!("Dataset: {} ({} jobs)", report.path, report.jobs);
    println!("Job types: {}", report.job_types.join(", "));
    println!("Industries: {}", report.industries.join(", "));
    match (report.min_salary, report.max_salary) {
        (Some(min), Some(max)) => println!("Salaries: min {min}, max {max}"),
        _ => println!("Salaries: no usable values"),
    }
    if let Some(count) = report.selected_jobs {
        println!("Selected jobs: {count}");
    }
    if let (Some(salary), Some(count)) = (report.query_salary, report.matching_jobs) {
        println!("Jobs paying {salary}: {count}");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let mut insights = Insights::new();
    let report = build_report(&mut insights, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_CSV: &str = "\
job_type,industry,min_salary,max_salary
FULL_TIME,IT,2000,3000
PART_TIME,Finance,invalid,invalid
CONTRACT,IT,1500,2500
FULL_TIME,Finance,1700,1900
";

    fn sample_args(dir: &TempDir) -> Args {
        let path = dir.path().join("jobs.csv");
        fs::write(&path, SAMPLE_CSV).unwrap();
        Args {
            path: path.display().to_string(),
            ..Args::default()
        }
    }

    #[test]
    fn test_parse_args_full() {
        let args = parse_args(
            ["jobs.csv", "1800", "--job-type", "FULL_TIME", "--json"]
                .into_iter()
                .map(String::from),
        )
        .unwrap();

        assert_eq!(args.path, "jobs.csv");
        assert_eq!(args.salary, Some(1800));
        assert_eq!(args.job_type.as_deref(), Some("FULL_TIME"));
        assert_eq!(args.industry, None);
        assert!(args.json);
    }

    #[test]
    fn test_parse_args_rejects_garbage() {
        assert!(parse_args(std::iter::empty()).is_err());
        assert!(parse_args(["jobs.csv", "soon"].into_iter().map(String::from)).is_err());
        assert!(parse_args(["jobs.csv", "--wat"].into_iter().map(String::from)).is_err());
    }

    #[test]
    fn test_report_over_sample_dataset() {
        let dir = TempDir::new().unwrap();
        let mut args = sample_args(&dir);
        args.salary = Some(1800);

        let mut insights = Insights::new();
        let report = build_report(&mut insights, &args).unwrap();

        assert_eq!(report.jobs, 4);
        assert_eq!(report.job_types, vec!["CONTRACT", "FULL_TIME", "PART_TIME"]);
        assert_eq!(report.min_salary, Some(1500));
        assert_eq!(report.max_salary, Some(3000));
        assert_eq!(report.selected_jobs, None);
        // Ranges 1500-2500 and 1700-1900 contain 1800.
        assert_eq!(report.matching_jobs, Some(2));
    }

    #[test]
    fn test_selectors_narrow_salary_matching() {
        let dir = TempDir::new().unwrap();
        let mut args = sample_args(&dir);
        args.salary = Some(1800);
        args.job_type = Some("FULL_TIME".into());
        args.industry = Some("Finance".into());

        let mut insights = Insights::new();
        let report = build_report(&mut insights, &args).unwrap();

        assert_eq!(report.selected_jobs, Some(1));
        assert_eq!(report.matching_jobs, Some(1));
    }

    #[test]
    fn test_report_without_usable_salaries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unknown.csv");
        fs::write(
            &path,
            "job_type,industry,min_salary,max_salary\nFULL_TIME,IT,invalid,\n",
        )
        .unwrap();
        let args = Args {
            path: path.display().to_string(),
            ..Args::default()
        };

        let mut insights = Insights::new();
        let report = build_report(&mut insights, &args).unwrap();

        assert_eq!(report.min_salary, None);
        assert_eq!(report.max_salary, None);
        assert_eq!(report.matching_jobs, None);

        let rendered = serde_json::to_string(&report).unwrap();
        assert!(!rendered.contains("matching_jobs"));
    }
}
