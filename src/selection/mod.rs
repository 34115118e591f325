//! Row selection bookkeeping
//!
//! A plain set of order IDs. `toggle_all` works on the rows the caller
//! passes (normally the visible page), not on the whole dataset.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::dataset::Order;
use crate::observability::Event;

/// Set of selected order IDs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    selected: BTreeSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the ID if absent, removes it if present.
    ///
    /// Returns true if the ID is selected afterwards.
    pub fn toggle(&mut self, order_id: &str) -> bool {
        let selected = if self.selected.remove(order_id) {
            false
        } else {
            self.selected.insert(order_id.to_string());
            true
        };
        self.changed();
        selected
    }

    /// If every given row is already selected, clears the whole selection;
    /// otherwise the selection becomes exactly the given rows.
    ///
    /// An empty slice counts as "all selected" and clears.
    pub fn toggle_all(&mut self, rows: &[Order]) {
        let all_selected = rows.iter().all(|o| self.selected.contains(&o.order_id));
        if all_selected {
            self.selected.clear();
        } else {
            self.selected = rows.iter().map(|o| o.order_id.clone()).collect();
        }
        self.changed();
    }

    /// Deselects everything
    pub fn clear(&mut self) {
        self.selected.clear();
        self.changed();
    }

    /// Returns true if the order is selected
    pub fn is_selected(&self, order_id: &str) -> bool {
        self.selected.contains(order_id)
    }

    /// Returns true if every given row is selected
    pub fn all_selected(&self, rows: &[Order]) -> bool {
        rows.iter().all(|o| self.is_selected(&o.order_id))
    }

    /// Number of selected orders
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected IDs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    fn changed(&self) {
        tracing::trace!(event = %Event::SelectionChanged, selected = self.selected.len());
    }
}
