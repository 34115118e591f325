//! CLI module for orderdesk
//!
//! Provides command-line interface for:
//! - query: One-shot filtered, sorted, paginated page
//! - session: JSON-lines interactive table session
//! - sample: Dump the configured dataset

mod args;
mod commands;
mod errors;
mod io;
mod protocol;

pub use args::{Cli, Command, QueryArgs};
pub use commands::{load_config, query, run, run_command, sample, session};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_error, write_response};
pub use protocol::{PageView, SessionCommand};
