//! Criteria subsystem for orderdesk
//!
//! Holds the user-controlled query parameters and the store that mutates
//! them.
//!
//! # Reset coupling
//!
//! Changing sorting, a filter, or the page size can make "page N"
//! meaningless. The `*_and_reset` setters therefore force `page = 1`
//! atomically with their update. Plain setters leave the page alone.

mod errors;
mod store;
mod types;

pub use errors::{CriteriaError, CriteriaResult};
pub use store::CriteriaStore;
pub use types::{
    DateFilter, OrderStatus, QueryCriteria, SortDirection, SortField, StatusFilter,
    DEFAULT_PAGE_SIZE,
};
