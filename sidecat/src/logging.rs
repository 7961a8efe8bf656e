//! Development-time tracing for debugging sidecat.
//!
//! Dev diagnostics via `RUST_LOG`, output to stderr. Not part of the product
//! output: the label lines and file contents on stdout, and the open-failure
//! diagnostic on stderr, are emitted regardless of the filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
