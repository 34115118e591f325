//! Criteria store with page-reset coupling
//!
//! Reset setters update their field(s) and force `page = 1` in the same
//! call, so no caller can observe the new filter with the old page.
//! `set_page` is the only mutator that moves off page 1 deliberately.

use std::num::NonZeroUsize;

use super::errors::{CriteriaError, CriteriaResult};
use super::types::{DateFilter, QueryCriteria, SortDirection, SortField, StatusFilter};
use crate::observability::Event;

/// Owner of the current query criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaStore {
    criteria: QueryCriteria,
}

impl CriteriaStore {
    /// Creates a store holding the default criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a non-default initial page size
    pub fn with_page_size(page_size: usize) -> CriteriaResult<Self> {
        let mut store = Self::new();
        store.set_page_size(page_size)?;
        Ok(store)
    }

    /// Borrows the current criteria
    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    /// Owned copy of the current criteria, for handing to the executor
    pub fn snapshot(&self) -> QueryCriteria {
        self.criteria.clone()
    }

    // -------------------------------------------------------------------------
    // Plain setters
    // -------------------------------------------------------------------------

    /// Sets the search term without touching the page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.changed("search_term");
    }

    /// Sets the status filter without touching the page
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.criteria.status_filter = filter;
        self.changed("status_filter");
    }

    /// Sets the date filter without touching the page
    pub fn set_date_filter(&mut self, filter: DateFilter) {
        self.criteria.date_filter = filter;
        self.changed("date_filter");
    }

    /// Moves to a page. Out-of-range pages are allowed and yield empty rows.
    pub fn set_page(&mut self, page: usize) {
        self.criteria.page = page;
        self.changed("page");
    }

    /// Sets the page size without touching the page.
    ///
    /// Zero is rejected and leaves the store unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> CriteriaResult<()> {
        self.criteria.page_size = Self::validate_page_size(page_size)?;
        self.changed("page_size");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reset setters
    // -------------------------------------------------------------------------

    /// Sets the search term and returns to page 1
    pub fn set_search_term_and_reset(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.reset_page("search_term");
    }

    /// Sets sort field and direction together and returns to page 1
    pub fn set_sorting_and_reset(&mut self, field: Option<SortField>, direction: SortDirection) {
        self.criteria.sort_field = field;
        self.criteria.sort_direction = direction;
        self.reset_page("sorting");
    }

    /// Sets the status filter and returns to page 1
    pub fn set_status_filter_and_reset(&mut self, filter: StatusFilter) {
        self.criteria.status_filter = filter;
        self.reset_page("status_filter");
    }

    /// Sets the date filter and returns to page 1
    pub fn set_date_filter_and_reset(&mut self, filter: DateFilter) {
        self.criteria.date_filter = filter;
        self.reset_page("date_filter");
    }

    /// Sets the page size and returns to page 1.
    ///
    /// Zero is rejected and leaves the store unchanged, page included.
    pub fn set_page_size_and_reset(&mut self, page_size: usize) -> CriteriaResult<()> {
        self.criteria.page_size = Self::validate_page_size(page_size)?;
        self.reset_page("page_size");
        Ok(())
    }

    /// Restores every criterion to its default
    pub fn reset_defaults(&mut self) {
        self.criteria = QueryCriteria::default();
        self.changed("all");
    }

    fn validate_page_size(page_size: usize) -> CriteriaResult<NonZeroUsize> {
        NonZeroUsize::new(page_size).ok_or_else(|| {
            tracing::warn!(event = %Event::PageSizeRejected, page_size, "rejected page size");
            CriteriaError::InvalidPageSize(page_size)
        })
    }

    fn reset_page(&mut self, field: &'static str) {
        let previous = self.criteria.page;
        self.criteria.page = 1;
        self.changed(field);
        if previous != 1 {
            tracing::trace!(event = %Event::PageReset, field, previous, "page reset to 1");
        }
    }

    fn changed(&self, field: &'static str) {
        tracing::trace!(
            event = %Event::CriteriaChanged,
            field,
            page = self.criteria.page,
            "criteria changed"
        );
    }
}

impl From<QueryCriteria> for CriteriaStore {
    fn from(criteria: QueryCriteria) -> Self {
        Self { criteria }
    }
}
