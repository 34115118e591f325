//! orderdesk CLI entry point
//!
//! Parses nothing itself: all logic lives in the CLI module. Errors go to
//! stderr and exit non-zero.

use orderdesk::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
