//! Observable events for orderdesk
//!
//! Every log line carries an `event` field with one of these codes so
//! consumers can filter on a stable name rather than message text.

use std::fmt;

/// Observable events in orderdesk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,
    /// Dataset loaded from disk
    DatasetLoaded,

    // Criteria
    /// A criterion was mutated
    CriteriaChanged,
    /// A reset setter moved the page back to 1
    PageReset,
    /// A page size of zero was rejected
    PageSizeRejected,

    // Query
    /// Query executed
    QueryExecuted,
    /// A display date fell back to the epoch
    DateUnparseable,

    // Selection
    /// Selection set changed
    SelectionChanged,

    // CLI
    /// A session command could not be applied
    CommandRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",

            Event::CriteriaChanged => "CRITERIA_CHANGED",
            Event::PageReset => "PAGE_RESET",
            Event::PageSizeRejected => "PAGE_SIZE_REJECTED",

            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::DateUnparseable => "DATE_UNPARSEABLE",

            Event::SelectionChanged => "SELECTION_CHANGED",

            Event::CommandRejected => "COMMAND_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::DatasetLoaded,
            Event::CriteriaChanged,
            Event::PageReset,
            Event::PageSizeRejected,
            Event::QueryExecuted,
            Event::DateUnparseable,
            Event::SelectionChanged,
            Event::CommandRejected,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Event::PageReset.to_string(), "PAGE_RESET");
    }
}
