//! Query Executor subsystem for orderdesk
//!
//! The executor maps `(dataset, criteria, now)` to one page of rows.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter rows: status, date bucket, then search
//! 2. Sort (if a sort field is set), stable in both directions
//! 3. Paginate and compute page metadata
//!
//! # Invariants
//!
//! - Deterministic: identical inputs and `now` give identical results
//! - Never fails: bad pages and bad dates degrade, they do not error
//! - Rows with equal sort keys keep their dataset order

mod executor;
mod filters;
mod paginator;
mod result;
mod sorter;

pub use executor::QueryExecutor;
pub use filters::RowFilter;
pub use paginator::Paginator;
pub use result::QueryResult;
pub use sorter::ResultSorter;
