//! Page slicing
//!
//! Never fails: page 0 and pages past the end give an empty slice with
//! flags computed from the same formulas as a valid page.

use std::num::NonZeroUsize;

use crate::dataset::Order;

use super::result::QueryResult;

/// Slices a filtered, sorted sequence into one page
pub struct Paginator;

impl Paginator {
    /// Number of pages for `total_items`; 0 when there are no items
    pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
        total_items.div_ceil(page_size.get())
    }

    /// Builds the result for `page` out of the full filtered sequence
    pub fn paginate(rows: Vec<Order>, page: usize, page_size: NonZeroUsize) -> QueryResult {
        let total_items = rows.len();
        let total_pages = Self::total_pages(total_items, page_size);

        let page_rows = match page.checked_sub(1) {
            Some(index) => {
                let start = index.saturating_mul(page_size.get());
                rows.into_iter().skip(start).take(page_size.get()).collect()
            }
            None => Vec::new(),
        };

        QueryResult {
            rows: page_rows,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
            page,
            page_size: page_size.get(),
        }
    }
}
