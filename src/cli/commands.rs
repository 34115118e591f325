//! CLI command implementations
//!
//! Every command follows the same order:
//! 1. Load configuration (file or defaults)
//! 2. Load the dataset named by the configuration
//! 3. Build criteria and run the query
//! 4. Write JSON to the output
//!
//! Commands take their reader and writer as parameters so they can be
//! driven in tests without a terminal.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::criteria::{CriteriaStore, SortDirection};
use crate::dates::{Clock, SystemClock};
use crate::executor::{QueryExecutor, QueryResult};
use crate::observability::{self, Event};
use crate::pagination::{item_range, page_window, ItemRange, PageMarker};
use crate::session::TableSession;

use super::args::{Cli, Command, QueryArgs};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{read_requests, write_error, write_response};
use super::protocol::{PageView, SessionCommand};

/// Main entry point for the CLI
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = load_config(cli.config.as_deref())?;
    observability::init_logging(&config.log_filter);
    run_command(&config, cli.command)
}

/// Run the appropriate command against stdin/stdout
pub fn run_command(config: &EngineConfig, cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match cmd {
        Command::Query(args) => query(config, &args, SystemClock, &mut writer),
        Command::Session => {
            let stdin = io::stdin();
            session(config, SystemClock, stdin.lock(), &mut writer)
        }
        Command::Sample => sample(config, &mut writer),
    }
}

/// Loads the config file if one was given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> CliResult<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::load(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// Output of the `query` command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryOutput {
    #[serde(flatten)]
    result: QueryResult,
    page_window: Vec<PageMarker>,
    item_range: Option<ItemRange>,
}

/// Runs one query and writes the page
pub fn query<C: Clock, W: Write>(
    config: &EngineConfig,
    args: &QueryArgs,
    clock: C,
    writer: &mut W,
) -> CliResult<()> {
    let dataset = config.load_dataset()?;

    let mut store = CriteriaStore::with_page_size(args.page_size.unwrap_or(config.page_size))?;
    store.set_search_term(args.search.as_str());
    if args.sort.is_some() {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        store.set_sorting_and_reset(args.sort, direction);
    }
    store.set_status_filter(args.status);
    store.set_date_filter(args.date);
    store.set_page(args.page);

    let result = QueryExecutor::new(&dataset, clock).execute(store.criteria());
    let output = QueryOutput {
        page_window: page_window(result.page, result.total_pages),
        item_range: item_range(result.page, result.page_size, result.total_items),
        result,
    };
    write_response(writer, &output)
}

/// Interactive session over JSON lines.
///
/// Writes the page after every accepted command. A rejected command
/// produces an error line and leaves the session unchanged; only an I/O
/// failure on the input ends the loop early.
pub fn session<C: Clock, R: BufRead, W: Write>(
    config: &EngineConfig,
    clock: C,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    let dataset = config.load_dataset()?;
    let mut session = TableSession::with_clock(dataset, clock).with_page_size(config.page_size)?;

    for request in read_requests(reader) {
        let outcome = request
            .and_then(SessionCommand::from_value)
            .and_then(|command| command.apply(&mut session).map_err(CliError::from));

        match outcome {
            Ok(()) => write_response(writer, &PageView::capture(&session))?,
            Err(e) if e.code() == &CliErrorCode::IoError => {
                write_error(writer, e.code_str(), e.message())?;
                break;
            }
            Err(e) => {
                tracing::warn!(
                    event = %Event::CommandRejected,
                    code = e.code_str(),
                    reason = e.message(),
                    "session command rejected"
                );
                write_error(writer, e.code_str(), e.message())?;
            }
        }
    }

    Ok(())
}

/// Writes the configured dataset as a JSON array
pub fn sample<W: Write>(config: &EngineConfig, writer: &mut W) -> CliResult<()> {
    let dataset = config.load_dataset()?;
    write_response(writer, &dataset.orders())
}
