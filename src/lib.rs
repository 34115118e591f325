//! orderdesk - deterministic filter, sort and paginate engine for order tables
//!
//! A query is a pure function of the dataset, the criteria and one sampled
//! instant: filter, then stable sort, then paginate.

pub mod cli;
pub mod config;
pub mod criteria;
pub mod dataset;
pub mod dates;
pub mod executor;
pub mod observability;
pub mod pagination;
pub mod selection;
pub mod session;

pub use criteria::{
    CriteriaError, CriteriaStore, DateFilter, OrderStatus, QueryCriteria, SortDirection,
    SortField, StatusFilter,
};
pub use dataset::{Dataset, Order, User};
pub use dates::{Clock, FixedClock, SystemClock};
pub use executor::{QueryExecutor, QueryResult};
pub use session::TableSession;
