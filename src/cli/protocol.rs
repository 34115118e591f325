//! Session command protocol
//!
//! One JSON object per line, discriminated by `op`:
//!
//! ```json
//! {"op": "search", "term": "lane", "reset": true}
//! {"op": "sort", "field": "date", "direction": "desc"}
//! {"op": "status", "filter": "pending", "reset": true}
//! {"op": "date", "filter": "recent", "reset": true}
//! {"op": "page", "page": 2}
//! {"op": "pageSize", "size": 20, "reset": true}
//! {"op": "toggle", "orderId": "#CM9801"}
//! {"op": "toggleAll"}
//! {"op": "clearSelection"}
//! {"op": "reset"}
//! {"op": "show"}
//! ```
//!
//! `sort` always resets the page; a missing `field` clears sorting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::criteria::{
    CriteriaResult, DateFilter, QueryCriteria, SortDirection, SortField, StatusFilter,
};
use crate::dates::Clock;
use crate::executor::QueryResult;
use crate::pagination::{ItemRange, PageMarker};
use crate::session::TableSession;

use super::errors::{CliError, CliResult};

/// A single session command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SessionCommand {
    Search {
        term: String,
        #[serde(default)]
        reset: bool,
    },
    Sort {
        #[serde(default)]
        field: Option<SortField>,
        #[serde(default)]
        direction: SortDirection,
    },
    Status {
        filter: StatusFilter,
        #[serde(default)]
        reset: bool,
    },
    Date {
        filter: DateFilter,
        #[serde(default)]
        reset: bool,
    },
    Page {
        page: usize,
    },
    PageSize {
        size: usize,
        #[serde(default)]
        reset: bool,
    },
    Toggle {
        #[serde(rename = "orderId")]
        order_id: String,
    },
    ToggleAll,
    ClearSelection,
    Reset,
    Show,
}

impl SessionCommand {
    /// Decodes a command from a parsed JSON line
    pub fn from_value(value: Value) -> CliResult<Self> {
        serde_json::from_value(value).map_err(|e| CliError::invalid_command(e.to_string()))
    }

    /// Applies the command to a session
    pub fn apply<C: Clock>(self, session: &mut TableSession<C>) -> CriteriaResult<()> {
        let store = session.criteria_mut();
        match self {
            SessionCommand::Search { term, reset: true } => store.set_search_term_and_reset(term),
            SessionCommand::Search { term, reset: false } => store.set_search_term(term),
            SessionCommand::Sort { field, direction } => {
                store.set_sorting_and_reset(field, direction)
            }
            SessionCommand::Status { filter, reset: true } => {
                store.set_status_filter_and_reset(filter)
            }
            SessionCommand::Status { filter, reset: false } => store.set_status_filter(filter),
            SessionCommand::Date { filter, reset: true } => store.set_date_filter_and_reset(filter),
            SessionCommand::Date { filter, reset: false } => store.set_date_filter(filter),
            SessionCommand::Page { page } => store.set_page(page),
            SessionCommand::PageSize { size, reset: true } => store.set_page_size_and_reset(size)?,
            SessionCommand::PageSize { size, reset: false } => store.set_page_size(size)?,
            SessionCommand::Toggle { order_id } => {
                session.selection_mut().toggle(&order_id);
            }
            SessionCommand::ToggleAll => session.toggle_all_on_page(),
            SessionCommand::ClearSelection => session.selection_mut().clear(),
            SessionCommand::Reset => store.reset_defaults(),
            SessionCommand::Show => {}
        }
        Ok(())
    }
}

/// What the session prints after each command
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Criteria the page was computed from
    pub criteria: QueryCriteria,
    /// The computed page
    #[serde(flatten)]
    pub result: QueryResult,
    /// Pagination bar slots
    pub page_window: Vec<PageMarker>,
    /// "Showing X-Y" bounds
    pub item_range: Option<ItemRange>,
    /// Selected order IDs
    pub selected: Vec<String>,
}

impl PageView {
    /// Captures the session's current page
    pub fn capture<C: Clock>(session: &TableSession<C>) -> Self {
        let result = session.current_page();
        Self {
            criteria: session.criteria().snapshot(),
            page_window: session.page_window(&result),
            item_range: session.item_range(&result),
            selected: session.selection().iter().map(str::to_string).collect(),
            result,
        }
    }
}
