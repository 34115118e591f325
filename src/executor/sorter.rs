//! Result sorting for query execution
//!
//! Sort is stable in both directions: descending reverses the comparator,
//! so rows with equal keys keep their filtered order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::criteria::{SortDirection, SortField};
use crate::dataset::Order;
use crate::dates::resolve_instant;

/// Sorts filtered rows
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts rows in place by `field` and `direction`.
    ///
    /// Date keys are resolved once per row against `now`.
    pub fn sort(
        rows: &mut Vec<Order>,
        field: SortField,
        direction: SortDirection,
        now: DateTime<Utc>,
    ) {
        match field {
            SortField::Date => Self::sort_by_instant(rows, direction, now),
            SortField::OrderId => Self::sort_by_text(rows, direction, |o| o.order_id.as_str()),
            SortField::User => Self::sort_by_text(rows, direction, |o| o.user.name.as_str()),
            SortField::Project => Self::sort_by_text(rows, direction, |o| o.project.as_str()),
            SortField::Address => Self::sort_by_text(rows, direction, |o| o.address.as_str()),
            SortField::Status => Self::sort_by_text(rows, direction, |o| o.status.as_str()),
        }
    }

    fn sort_by_text<F>(rows: &mut [Order], direction: SortDirection, key: F)
    where
        F: Fn(&Order) -> &str,
    {
        rows.sort_by(|a, b| Self::directed(key(a).cmp(key(b)), direction));
    }

    fn sort_by_instant(rows: &mut Vec<Order>, direction: SortDirection, now: DateTime<Utc>) {
        let mut keyed: Vec<(DateTime<Utc>, Order)> = rows
            .drain(..)
            .map(|order| (resolve_instant(&order.date, now), order))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| Self::directed(a.cmp(b), direction));

        rows.extend(keyed.into_iter().map(|(_, order)| order));
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
