/// Data layer: core types, loading, caching, and querying.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  memoize per path → Arc<JobDataset>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  JobDataset   │  Vec<Job>, distinct-value index
///   └──────────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │  filter / salary    │  pure queries → sets, sublists, bounds
///   └────────────────────┘
/// ```
pub mod cache;
pub mod errors;
pub mod filter;
pub mod loader;
pub mod model;
pub mod salary;
