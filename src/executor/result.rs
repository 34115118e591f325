//! Result types for query execution

use serde::Serialize;

use crate::dataset::Order;

/// One page of query output plus the metadata pagination controls need
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Rows of the requested page, at most `page_size`
    pub rows: Vec<Order>,
    /// Count after filtering, before pagination
    pub total_items: usize,
    /// `ceil(total_items / page_size)`, 0 when nothing matched
    pub total_pages: usize,
    /// `page < total_pages`
    pub has_next_page: bool,
    /// `page > 1`
    pub has_previous_page: bool,
    /// Page the result was computed for
    pub page: usize,
    /// Page size the result was computed for
    pub page_size: usize,
}

impl QueryResult {
    /// Returns true if the page has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows on the page
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the page rows
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.rows.iter()
    }

    /// Order IDs on the page, in row order
    pub fn order_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|o| o.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = QueryResult {
            rows: Vec::new(),
            total_items: 0,
            total_pages: 0,
            has_next_page: false,
            has_previous_page: false,
            page: 1,
            page_size: 10,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["totalItems"], 0);
        assert_eq!(value["hasNextPage"], false);
        assert_eq!(value["pageSize"], 10);
        assert!(result.is_empty());
    }
}
