//! Pagination control helpers
//!
//! Derives what a pagination bar shows from a page index and the page
//! count: which page numbers get a button, where gaps go, and the
//! "showing X-Y of N" bounds.

use serde::Serialize;

/// Maximum number of numbered slots in the window
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One slot of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "page")]
pub enum PageMarker {
    /// A numbered page button
    Page(usize),
    /// A gap between non-adjacent page numbers
    Ellipsis,
}

/// Page numbers to render for `current` out of `total_pages`.
///
/// - `total_pages <= 5`: every page
/// - near the start: `1 2 3 4 … last`
/// - near the end: `1 … last-3 last-2 last-1 last`
/// - otherwise: `1 … current-1 current current+1 … last`
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(MAX_VISIBLE_PAGES + 2);
    if current <= 3 {
        markers.extend((1..=4).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if current >= total_pages - 2 {
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((total_pages - 3..=total_pages).map(PageMarker::Page));
    } else {
        markers.push(PageMarker::Page(1));
        markers.push(PageMarker::Ellipsis);
        markers.extend((current - 1..=current + 1).map(PageMarker::Page));
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    }
    markers
}

/// 1-based bounds of the rows on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRange {
    /// Position of the first row on the page
    pub first: usize,
    /// Position of the last row on the page
    pub last: usize,
}

/// Bounds of `page` for the "showing X-Y of N" summary; `None` if the page
/// holds no rows.
pub fn item_range(page: usize, page_size: usize, total_items: usize) -> Option<ItemRange> {
    let start = page.checked_sub(1)?.checked_mul(page_size)?;
    if page_size == 0 || start >= total_items {
        return None;
    }
    let last = start.saturating_add(page_size).min(total_items);
    Some(ItemRange {
        first: start + 1,
        last,
    })
}
