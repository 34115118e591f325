//! Query executor for orderdesk
//!
//! Executes criteria against a dataset, producing deterministic results.
//!
//! Execution flow (strict order):
//! 1. Sample "now" once from the clock
//! 2. Filter rows (status, date bucket, search)
//! 3. Sort filtered rows (if a sort field is set), stably
//! 4. Slice the requested page and compute pagination metadata

use chrono::{DateTime, Utc};

use crate::criteria::QueryCriteria;
use crate::dataset::{Dataset, Order};
use crate::dates::Clock;
use crate::observability::Event;

use super::filters::RowFilter;
use super::paginator::Paginator;
use super::result::QueryResult;
use super::sorter::ResultSorter;

/// Query executor over a borrowed dataset
pub struct QueryExecutor<'a, C: Clock> {
    dataset: &'a Dataset,
    clock: C,
}

impl<'a, C: Clock> QueryExecutor<'a, C> {
    /// Creates a new executor
    pub fn new(dataset: &'a Dataset, clock: C) -> Self {
        Self { dataset, clock }
    }

    /// Executes criteria, sampling "now" from the clock once.
    pub fn execute(&self, criteria: &QueryCriteria) -> QueryResult {
        self.execute_at(criteria, self.clock.now())
    }

    /// Executes criteria at a given instant.
    ///
    /// This method is pure: same dataset + criteria + `now` = same result.
    pub fn execute_at(&self, criteria: &QueryCriteria, now: DateTime<Utc>) -> QueryResult {
        let rows = self.filter_at(criteria, now);
        let result = Paginator::paginate(rows, criteria.page, criteria.page_size);

        tracing::debug!(
            event = %Event::QueryExecuted,
            total_items = result.total_items,
            total_pages = result.total_pages,
            page = result.page,
            returned = result.rows.len(),
            "query executed"
        );

        result
    }

    /// Filtered and sorted rows before pagination
    pub fn filter_at(&self, criteria: &QueryCriteria, now: DateTime<Utc>) -> Vec<Order> {
        let filter = RowFilter::new(criteria, now);

        let mut rows: Vec<Order> = self
            .dataset
            .orders()
            .iter()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect();

        if let Some(field) = criteria.sort_field {
            ResultSorter::sort(&mut rows, field, criteria.sort_direction, now);
        }

        rows
    }

    /// Returns the dataset being queried
    pub fn dataset(&self) -> &Dataset {
        self.dataset
    }
}
