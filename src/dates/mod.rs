//! Date subsystem for orderdesk
//!
//! Resolves display date strings to instants and classifies instants into
//! relative buckets. "Now" always comes from a [`Clock`] so callers control
//! it; the executor samples it once per query.

mod bucket;
mod clock;
mod resolver;

pub use bucket::{in_bucket, matches_date_filter};
pub use clock::{Clock, FixedClock, SystemClock};
pub use resolver::{parse_generic, resolve_instant};
