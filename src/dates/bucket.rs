//! Date bucket membership
//!
//! | bucket      | window                                   |
//! |-------------|------------------------------------------|
//! | `recent`    | `instant >= now - 1 day`                 |
//! | `today`     | `instant >= now - 1 day` (same as recent)|
//! | `yesterday` | `now - 2 days <= instant < now - 1 day`  |
//! | `thisWeek`  | `instant >= now - 7 days`                |
//! | `all`       | always                                   |

use chrono::{DateTime, Duration, Utc};

use super::resolver::resolve_instant;
use crate::criteria::DateFilter;

/// Returns true if `instant` falls in the bucket selected by `filter`
pub fn in_bucket(filter: DateFilter, instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let day_ago = now - Duration::days(1);
    match filter {
        DateFilter::All => true,
        DateFilter::Recent | DateFilter::Today => instant >= day_ago,
        DateFilter::Yesterday => instant >= now - Duration::days(2) && instant < day_ago,
        DateFilter::ThisWeek => instant >= now - Duration::days(7),
    }
}

/// Resolves a date label and checks bucket membership
pub fn matches_date_filter(filter: DateFilter, label: &str, now: DateTime<Utc>) -> bool {
    if filter == DateFilter::All {
        return true;
    }
    in_bucket(filter, resolve_instant(label, now), now)
}
