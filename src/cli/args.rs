//! CLI argument definitions using clap
//!
//! Commands:
//! - orderdesk query [filters...]
//! - orderdesk session
//! - orderdesk sample

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::criteria::{DateFilter, SortField, StatusFilter};

/// orderdesk - filter, sort and paginate dashboard orders
#[derive(Parser, Debug)]
#[command(name = "orderdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one query and print the page as JSON
    Query(QueryArgs),

    /// Read JSON-lines commands from stdin and print the page after each
    Session,

    /// Print the bundled sample dataset as JSON
    Sample,
}

/// Criteria for a one-shot query
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Case-insensitive search over order ID, user, project and address
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort field: orderId, user, project, address, date, status
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Status filter: all or a status label
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Date filter: all, recent, today, yesterday, thisWeek
    #[arg(long, default_value = "all")]
    pub date: DateFilter,

    /// 1-based page
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
