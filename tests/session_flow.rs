//! Session Flow Tests
//!
//! Drives the JSON-lines session the way a dashboard front end would:
//! one command per line in, one page snapshot per line out.

use std::io::{Cursor, Write};

use chrono::{TimeZone, Utc};
use serde_json::Value;

use orderdesk::cli;
use orderdesk::config::EngineConfig;
use orderdesk::FixedClock;

fn clock() -> FixedClock {
    FixedClock::at(Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap())
}

fn drive(config: &EngineConfig, commands: &[&str]) -> Vec<Value> {
    let input = commands.join("\n");
    let mut out = Vec::new();
    cli::session(config, clock(), Cursor::new(input), &mut out).unwrap();

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn selected(response: &Value) -> Vec<&str> {
    response["data"]["selected"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Test: a filter change after paging lands back on page 1.
#[test]
fn test_filter_after_paging_resets() {
    let responses = drive(
        &EngineConfig::default(),
        &[
            r#"{"op": "page", "page": 4}"#,
            r#"{"op": "search", "term": "dashboard", "reset": true}"#,
        ],
    );

    assert_eq!(responses[0]["data"]["page"], 4);
    assert_eq!(responses[0]["data"]["rows"][0]["orderId"], "#CM9831");

    let data = &responses[1]["data"];
    assert_eq!(data["page"], 1);
    assert_eq!(data["totalItems"], 3);
    assert_eq!(data["criteria"]["searchTerm"], "dashboard");
}

/// Test: the pagination window follows the current page.
#[test]
fn test_page_window_follows_page() {
    let responses = drive(
        &EngineConfig::default(),
        &[
            r#"{"op": "pageSize", "size": 2, "reset": true}"#,
            r#"{"op": "page", "page": 10}"#,
        ],
    );

    let window = responses[1]["data"]["pageWindow"].as_array().unwrap();
    let pages: Vec<Value> = window.iter().map(|m| m["page"].clone()).collect();
    assert_eq!(window.first().unwrap()["page"], 1);
    assert_eq!(window.last().unwrap()["page"], 21);
    assert!(pages.contains(&Value::from(10)));
    assert_eq!(responses[1]["data"]["itemRange"]["first"], 19);
    assert_eq!(responses[1]["data"]["itemRange"]["last"], 20);
}

/// Test: reset restores every default.
#[test]
fn test_reset_restores_defaults() {
    let responses = drive(
        &EngineConfig::default(),
        &[
            r#"{"op": "status", "filter": "complete", "reset": true}"#,
            r#"{"op": "sort", "field": "user", "direction": "desc"}"#,
            r#"{"op": "reset"}"#,
        ],
    );

    assert_eq!(responses[1]["data"]["rows"][0]["user"]["name"], "Stephanie Allen");

    let criteria = &responses[2]["data"]["criteria"];
    assert_eq!(criteria["statusFilter"], "all");
    assert_eq!(criteria["sortField"], Value::Null);
    assert_eq!(responses[2]["data"]["totalItems"], 41);
}

// =============================================================================
// SELECTION
// =============================================================================

/// Test: toggling rows and the header checkbox.
#[test]
fn test_selection_flow() {
    let responses = drive(
        &EngineConfig::default(),
        &[
            r##"{"op": "toggle", "orderId": "#CM9803"}"##,
            r#"{"op": "date", "filter": "recent", "reset": true}"#,
            r#"{"op": "toggleAll"}"#,
            r#"{"op": "toggleAll"}"#,
            r##"{"op": "toggle", "orderId": "#CM9841"}"##,
            r#"{"op": "clearSelection"}"#,
        ],
    );

    assert_eq!(selected(&responses[0]), vec!["#CM9803"]);
    assert_eq!(
        selected(&responses[2]),
        vec!["#CM9801", "#CM9802", "#CM9803", "#CM9804", "#CM9806"]
    );
    assert!(selected(&responses[3]).is_empty());
    assert_eq!(selected(&responses[4]), vec!["#CM9841"]);
    assert!(selected(&responses[5]).is_empty());
}

/// Test: selection survives filter changes.
#[test]
fn test_selection_survives_filtering() {
    let responses = drive(
        &EngineConfig::default(),
        &[
            r##"{"op": "toggle", "orderId": "#CM9805"}"##,
            r#"{"op": "status", "filter": "pending", "reset": true}"#,
        ],
    );

    assert_eq!(selected(&responses[1]), vec!["#CM9805"]);
}

// =============================================================================
// ERRORS AND CONFIG
// =============================================================================

/// Test: rejected commands report an error line and change nothing.
#[test]
fn test_rejected_commands_do_not_mutate() {
    let responses = drive(
        &EngineConfig::default(),
        &[
            r#"{"op": "page", "page": 2}"#,
            r#"{"op": "status", "filter": "shipped"}"#,
            r#"{"op": "explode"}"#,
            r#"{"op": "show"}"#,
        ],
    );

    assert_eq!(responses.len(), 4);
    assert_eq!(responses[1]["status"], "error");
    assert_eq!(responses[1]["code"], "ORDERDESK_CLI_INVALID_COMMAND");
    assert_eq!(responses[2]["status"], "error");
    assert_eq!(responses[3]["data"]["page"], 2);
    assert_eq!(responses[3]["data"]["criteria"]["statusFilter"], "all");
}

/// Test: page size and dataset come from the config file.
#[test]
fn test_config_file_drives_session() {
    let dataset = r##"[
        {"orderId": "#1", "user": {"name": "A"}, "project": "P", "address": "X", "date": "Just now", "status": "Pending"},
        {"orderId": "#2", "user": {"name": "B"}, "project": "P", "address": "X", "date": "Just now", "status": "Complete"},
        {"orderId": "#3", "user": {"name": "C"}, "project": "P", "address": "X", "date": "Just now", "status": "Pending"}
    ]"##;
    let mut dataset_file = tempfile::NamedTempFile::new().unwrap();
    dataset_file.write_all(dataset.as_bytes()).unwrap();

    let config_json = serde_json::json!({
        "page_size": 2,
        "dataset": dataset_file.path(),
    });
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(config_json.to_string().as_bytes())
        .unwrap();

    let config = cli::load_config(Some(config_file.path())).unwrap();
    let responses = drive(&config, &[r#"{"op": "show"}"#]);

    let data = &responses[0]["data"];
    assert_eq!(data["totalItems"], 3);
    assert_eq!(data["totalPages"], 2);
    assert_eq!(data["rows"].as_array().unwrap().len(), 2);
}

/// Test: a missing config file is a config error.
#[test]
fn test_missing_config_file() {
    let err = cli::load_config(Some(std::path::Path::new("/nonexistent/orderdesk.json")))
        .unwrap_err();
    assert_eq!(err.code_str(), "ORDERDESK_CLI_CONFIG_ERROR");
}
