//! Tracing setup for the CLI.
//!
//! Diagnostics go to stderr so stdout carries nothing but robot reports.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to `default_filter` (the config's
/// `log_filter`, normally `warn`). Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=martian_robots=debug martian-robots mission.txt
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
