//! Row filtering for query execution
//!
//! A row passes iff it satisfies the status, date and search predicates.
//! The cheap predicates run first; substring search runs last.

use chrono::{DateTime, Utc};

use crate::criteria::QueryCriteria;
use crate::dataset::Order;
use crate::dates::matches_date_filter;

/// Evaluates the filter stage of a query
#[derive(Debug, Clone)]
pub struct RowFilter<'c> {
    criteria: &'c QueryCriteria,
    needle: String,
    now: DateTime<Utc>,
}

impl<'c> RowFilter<'c> {
    /// Prepares a filter for one execution
    pub fn new(criteria: &'c QueryCriteria, now: DateTime<Utc>) -> Self {
        Self {
            criteria,
            needle: criteria.search_term.to_lowercase(),
            now,
        }
    }

    /// Checks if an order passes all predicates (AND semantics)
    pub fn matches(&self, order: &Order) -> bool {
        self.matches_status(order) && self.matches_date(order) && self.matches_search(order)
    }

    /// Status predicate
    pub fn matches_status(&self, order: &Order) -> bool {
        self.criteria.status_filter.matches(&order.status)
    }

    /// Date bucket predicate
    pub fn matches_date(&self, order: &Order) -> bool {
        matches_date_filter(self.criteria.date_filter, &order.date, self.now)
    }

    /// Search predicate over order ID, user name, project and address
    pub fn matches_search(&self, order: &Order) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            order.order_id.as_str(),
            order.user.name.as_str(),
            order.project.as_str(),
            order.address.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
