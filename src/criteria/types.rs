//! Criterion value types
//!
//! Wire names (serde, `FromStr`, `Display`) match the names the dashboard
//! controls send: `orderId`, `asc`, `thisWeek`, `In Progress`, ...

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CriteriaError;

/// Default page size of a fresh session
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Column a table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Order ID, lexicographic
    OrderId,
    /// User name, lexicographic
    User,
    /// Project, lexicographic
    Project,
    /// Address, lexicographic
    Address,
    /// Resolved instant of the display date
    Date,
    /// Status label, lexicographic
    Status,
}

impl SortField {
    /// All sortable fields in column order
    pub const ALL: [SortField; 6] = [
        SortField::OrderId,
        SortField::User,
        SortField::Project,
        SortField::Address,
        SortField::Date,
        SortField::Status,
    ];

    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::OrderId => "orderId",
            SortField::User => "user",
            SortField::Project => "project",
            SortField::Address => "address",
            SortField::Date => "date",
            SortField::Status => "status",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orderid" | "order_id" => Ok(SortField::OrderId),
            "user" => Ok(SortField::User),
            "project" => Ok(SortField::Project),
            "address" => Ok(SortField::Address),
            "date" => Ok(SortField::Date),
            "status" => Ok(SortField::Status),
            _ => Err(CriteriaError::UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(CriteriaError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Closed set of order statuses the status filter can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// All statuses in display order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::InProgress,
        OrderStatus::Complete,
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Rejected,
    ];

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// Case-insensitive comparison against a row's status label
    pub fn matches_label(&self, label: &str) -> bool {
        label.to_lowercase() == self.label().to_lowercase()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.matches_label(wanted))
            .ok_or_else(|| CriteriaError::UnknownStatus(s.to_string()))
    }
}

/// Status filter: everything, or exactly one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Returns true if a row with this status label passes the filter
    pub fn matches(&self, label: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => status.matches_label(label),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.label()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Only(status)
    }
}

/// Relative-date bucket filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFilter {
    /// No date restriction
    #[default]
    All,
    /// Last 24 hours
    Recent,
    /// Last 24 hours (same window as `Recent`)
    Today,
    /// Between 48 and 24 hours ago
    Yesterday,
    /// Last 7 days
    ThisWeek,
}

impl DateFilter {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Recent => "recent",
            DateFilter::Today => "today",
            DateFilter::Yesterday => "yesterday",
            DateFilter::ThisWeek => "thisWeek",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilter {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DateFilter::All),
            "recent" => Ok(DateFilter::Recent),
            "today" => Ok(DateFilter::Today),
            "yesterday" => Ok(DateFilter::Yesterday),
            "thisweek" | "this_week" => Ok(DateFilter::ThisWeek),
            _ => Err(CriteriaError::UnknownDateFilter(s.to_string())),
        }
    }
}

/// The full set of user-controlled query parameters.
///
/// This is a plain value: the executor takes a snapshot of it and never
/// observes later mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCriteria {
    /// Free-text search, empty means no search
    pub search_term: String,
    /// Sort column, `None` keeps insertion order
    pub sort_field: Option<SortField>,
    /// Sort direction, ignored without a sort field
    pub sort_direction: SortDirection,
    /// Status filter
    pub status_filter: StatusFilter,
    /// Date bucket filter
    pub date_filter: DateFilter,
    /// 1-based page index; 0 yields an empty page
    pub page: usize,
    /// Rows per page
    pub page_size: NonZeroUsize,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            status_filter: StatusFilter::All,
            date_filter: DateFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
