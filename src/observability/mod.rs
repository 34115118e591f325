//! Observability subsystem for orderdesk
//!
//! Logging goes through `tracing`. Each event carries an `event` field
//! holding an [`Event`] code:
//!
//! ```ignore
//! tracing::debug!(event = %Event::QueryExecuted, total_items = 41, "query executed");
//! ```
//!
//! The library never installs a subscriber; binaries call [`init_logging`].

mod events;

pub use events::Event;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr
/// so stdout stays reserved for JSON responses. Calling this twice is a
/// no-op.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
