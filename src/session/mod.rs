//! Table session: the composition root for one order table
//!
//! Owns the dataset, the criteria store, the selection and the clock, and
//! recomputes the visible page on demand. Nothing here is global; a UI
//! layer holds a `TableSession` and passes it to whatever needs it.

use crate::criteria::{CriteriaResult, CriteriaStore};
use crate::dataset::Dataset;
use crate::dates::{Clock, SystemClock};
use crate::executor::{QueryExecutor, QueryResult};
use crate::pagination::{item_range, page_window, ItemRange, PageMarker};
use crate::selection::SelectionSet;

/// State for one interactive order table
#[derive(Debug, Clone)]
pub struct TableSession<C: Clock = SystemClock> {
    dataset: Dataset,
    criteria: CriteriaStore,
    selection: SelectionSet,
    clock: C,
}

impl TableSession<SystemClock> {
    /// Creates a session on the wall clock with default criteria
    pub fn new(dataset: Dataset) -> Self {
        Self::with_clock(dataset, SystemClock)
    }
}

impl<C: Clock> TableSession<C> {
    /// Creates a session with an explicit clock
    pub fn with_clock(dataset: Dataset, clock: C) -> Self {
        Self {
            dataset,
            criteria: CriteriaStore::new(),
            selection: SelectionSet::new(),
            clock,
        }
    }

    /// Replaces the initial page size
    pub fn with_page_size(mut self, page_size: usize) -> CriteriaResult<Self> {
        self.criteria.set_page_size(page_size)?;
        Ok(self)
    }

    /// The dataset being browsed
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Current criteria store
    pub fn criteria(&self) -> &CriteriaStore {
        &self.criteria
    }

    /// Mutable criteria store
    pub fn criteria_mut(&mut self) -> &mut CriteriaStore {
        &mut self.criteria
    }

    /// Current selection
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Mutable selection
    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    /// Recomputes the visible page from a snapshot of the criteria
    pub fn current_page(&self) -> QueryResult {
        let snapshot = self.criteria.snapshot();
        QueryExecutor::new(&self.dataset, &self.clock).execute(&snapshot)
    }

    /// Pagination bar slots for a computed page
    pub fn page_window(&self, result: &QueryResult) -> Vec<PageMarker> {
        page_window(result.page, result.total_pages)
    }

    /// "Showing X-Y" bounds for a computed page
    pub fn item_range(&self, result: &QueryResult) -> Option<ItemRange> {
        item_range(result.page, result.page_size, result.total_items)
    }

    /// Header checkbox behaviour: toggles every row of the visible page
    pub fn toggle_all_on_page(&mut self) {
        let page = self.current_page();
        self.selection.toggle_all(&page.rows);
    }
}
