//! Query Determinism Tests
//!
//! A query is a pure function of (dataset, criteria, now). These tests pin
//! the filter -> sort -> paginate order and its guarantees.
//!
//! Test Categories:
//! 1. Filter conjunction
//! 2. Stable sorting
//! 3. Pagination coverage
//! 4. Repeatability

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use chrono::{DateTime, TimeZone, Utc};

use orderdesk::{
    Dataset, DateFilter, FixedClock, Order, OrderStatus, QueryCriteria, QueryExecutor,
    SortDirection, SortField, StatusFilter,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
}

fn criteria() -> QueryCriteria {
    QueryCriteria::default()
}

fn run(dataset: &Dataset, criteria: &QueryCriteria) -> orderdesk::QueryResult {
    QueryExecutor::new(dataset, FixedClock::at(now())).execute(criteria)
}

fn ids(rows: &[Order]) -> Vec<&str> {
    rows.iter().map(|o| o.id()).collect()
}

// =============================================================================
// FILTER CONJUNCTION
// =============================================================================

/// Test: search and status must both hold for a row to pass.
#[test]
fn test_search_and_status_are_conjunctive() {
    let dataset = Dataset::sample();

    let mut c = criteria();
    c.search_term = "LANE".to_string();
    assert_eq!(ids(&run(&dataset, &c).rows), vec!["#CM9801", "#CM9805"]);

    c.status_filter = StatusFilter::Only(OrderStatus::Rejected);
    assert_eq!(ids(&run(&dataset, &c).rows), vec!["#CM9805"]);

    c.date_filter = DateFilter::Recent;
    assert!(run(&dataset, &c).rows.is_empty());
}

/// Test: dropping any one active filter never loses a row.
#[test]
fn test_relaxing_a_filter_only_grows_results() {
    let dataset = Dataset::sample();
    let matching = |c: &QueryCriteria| -> BTreeSet<String> {
        let mut c = c.clone();
        c.page = 1;
        c.page_size = NonZeroUsize::new(dataset.len().max(1)).unwrap();
        run(&dataset, &c)
            .rows
            .into_iter()
            .map(|o| o.order_id)
            .collect()
    };

    let searches = ["", "a", "lane", "an", "dashboard"];
    let statuses = [
        StatusFilter::All,
        StatusFilter::Only(OrderStatus::Pending),
        StatusFilter::Only(OrderStatus::Approved),
        StatusFilter::Only(OrderStatus::InProgress),
    ];
    let dates = [
        DateFilter::All,
        DateFilter::Recent,
        DateFilter::Yesterday,
        DateFilter::ThisWeek,
    ];

    for search in searches {
        for status in statuses {
            for date in dates {
                let mut c = criteria();
                c.search_term = search.to_string();
                c.status_filter = status;
                c.date_filter = date;
                let narrow = matching(&c);

                let mut without_search = c.clone();
                without_search.search_term.clear();
                let mut without_status = c.clone();
                without_status.status_filter = StatusFilter::All;
                let mut without_date = c.clone();
                without_date.date_filter = DateFilter::All;

                for relaxed in [without_search, without_status, without_date] {
                    let wide = matching(&relaxed);
                    assert!(
                        narrow.is_subset(&wide),
                        "{:?}/{:?}/{:?} lost rows when relaxed",
                        search,
                        status,
                        date
                    );
                }
            }
        }
    }
}

/// Test: every returned row satisfies every active filter.
#[test]
fn test_every_row_satisfies_filters() {
    let dataset = Dataset::sample();
    let mut c = criteria();
    c.status_filter = StatusFilter::Only(OrderStatus::InProgress);
    c.search_term = "a".to_string();
    c.page_size = NonZeroUsize::new(100).unwrap();

    let result = run(&dataset, &c);
    assert!(!result.rows.is_empty());
    for row in &result.rows {
        assert!(row.status.eq_ignore_ascii_case("in progress"));
        let haystack = format!(
            "{} {} {} {}",
            row.order_id, row.user.name, row.project, row.address
        )
        .to_lowercase();
        assert!(haystack.contains('a'), "{} should contain 'a'", row.id());
    }
}

/// Test: status is not a searchable field.
#[test]
fn test_search_ignores_status_and_date() {
    let dataset = Dataset::sample();
    let mut c = criteria();

    c.search_term = "rejected".to_string();
    assert_eq!(run(&dataset, &c).total_items, 0);

    c.search_term = "just now".to_string();
    assert_eq!(run(&dataset, &c).total_items, 0);
}

/// Test: an empty dataset yields zero pages and no navigation.
#[test]
fn test_empty_dataset() {
    let dataset = Dataset::new(Vec::new()).unwrap();
    let result = run(&dataset, &criteria());

    assert!(result.rows.is_empty());
    assert_eq!(result.total_items, 0);
    assert_eq!(result.total_pages, 0);
    assert!(!result.has_next_page);
    assert!(!result.has_previous_page);
}

// =============================================================================
// STABLE SORTING
// =============================================================================

/// Test: rows with equal keys keep their insertion order in both directions.
#[test]
fn test_sort_is_stable_both_directions() {
    let dataset = Dataset::new(vec![
        Order::new("#1", "Same", "P1", "A", "Just now", "Pending"),
        Order::new("#2", "Alpha", "P2", "A", "Just now", "Pending"),
        Order::new("#3", "Same", "P3", "A", "Just now", "Pending"),
        Order::new("#4", "Zulu", "P4", "A", "Just now", "Pending"),
        Order::new("#5", "Same", "P5", "A", "Just now", "Pending"),
    ])
    .unwrap();

    let mut c = criteria();
    c.sort_field = Some(SortField::User);
    assert_eq!(
        ids(&run(&dataset, &c).rows),
        vec!["#2", "#1", "#3", "#5", "#4"]
    );

    c.sort_direction = SortDirection::Desc;
    assert_eq!(
        ids(&run(&dataset, &c).rows),
        vec!["#4", "#1", "#3", "#5", "#2"]
    );
}

/// Test: date sort orders by resolved instant, unparseable dates tie at the epoch.
#[test]
fn test_date_sort_uses_resolved_instants() {
    let dataset = Dataset::sample();
    let mut c = criteria();
    c.sort_field = Some(SortField::Date);
    c.sort_direction = SortDirection::Desc;
    c.page_size = NonZeroUsize::new(8).unwrap();

    let result = run(&dataset, &c);
    assert_eq!(
        ids(&result.rows),
        vec!["#CM9801", "#CM9806", "#CM9802", "#CM9803", "#CM9804", "#CM9805", "#CM9807", "#CM9808"]
    );

    c.sort_direction = SortDirection::Asc;
    c.page_size = NonZeroUsize::new(41).unwrap();
    let result = run(&dataset, &c);
    assert_eq!(
        ids(&result.rows[35..]),
        vec!["#CM9805", "#CM9804", "#CM9803", "#CM9802", "#CM9801", "#CM9806"]
    );
    assert_eq!(ids(&result.rows[..2]), vec!["#CM9807", "#CM9808"]);
}

/// Test: status sorts by label text.
#[test]
fn test_status_sort_is_lexicographic() {
    let dataset = Dataset::sample();
    let mut c = criteria();
    c.sort_field = Some(SortField::Status);
    c.page_size = NonZeroUsize::new(41).unwrap();

    let statuses: Vec<String> = run(&dataset, &c)
        .rows
        .into_iter()
        .map(|o| o.status)
        .collect();
    let mut sorted = statuses.clone();
    sorted.sort();
    assert_eq!(statuses, sorted);
    assert_eq!(statuses.first().map(String::as_str), Some("Approved"));
    assert_eq!(statuses.last().map(String::as_str), Some("Rejected"));
}

// =============================================================================
// PAGINATION COVERAGE
// =============================================================================

/// Test: walking every page visits each filtered row exactly once.
#[test]
fn test_pages_partition_filtered_rows() {
    let dataset = Dataset::sample();

    for size in [1usize, 3, 7, 10, 41, 50] {
        let mut c = criteria();
        c.sort_field = Some(SortField::Project);
        c.page_size = NonZeroUsize::new(size).unwrap();

        let first = run(&dataset, &c);
        assert_eq!(first.total_pages, 41usize.div_ceil(size));

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            c.page = page;
            let result = run(&dataset, &c);
            assert!(result.rows.len() <= size);
            assert_eq!(result.has_previous_page, page > 1);
            assert_eq!(result.has_next_page, page < result.total_pages);
            seen.extend(result.rows.into_iter().map(|o| o.order_id));
        }

        assert_eq!(seen.len(), 41);
        let unique: BTreeSet<_> = seen.iter().collect();
        assert_eq!(unique.len(), 41);
    }
}

/// Test: pages outside 1..=total_pages are empty but keep the totals.
#[test]
fn test_out_of_range_pages_are_empty() {
    let dataset = Dataset::sample();
    let mut c = criteria();

    c.page = 0;
    let result = run(&dataset, &c);
    assert!(result.rows.is_empty());
    assert_eq!(result.total_items, 41);
    assert!(!result.has_previous_page);

    c.page = usize::MAX;
    let result = run(&dataset, &c);
    assert!(result.rows.is_empty());
    assert!(!result.has_next_page);
    assert!(result.has_previous_page);
}

// =============================================================================
// REPEATABILITY
// =============================================================================

/// Test: same inputs produce identical results.
#[test]
fn test_execution_is_idempotent() {
    let dataset = Dataset::sample();
    let mut c = criteria();
    c.search_term = "an".to_string();
    c.sort_field = Some(SortField::Address);
    c.sort_direction = SortDirection::Desc;
    c.date_filter = DateFilter::ThisWeek;

    let first = run(&dataset, &c);
    for _ in 0..5 {
        assert_eq!(run(&dataset, &c), first);
    }
    assert_eq!(Dataset::sample(), dataset);
}
