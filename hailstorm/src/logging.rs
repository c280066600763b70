//! Diagnostic tracing on stderr.
//!
//! Answers go to stdout; everything emitted through `tracing` goes to stderr
//! so the two never mix.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output is compact, on stderr.
///
/// # Example
/// ```bash
/// RUST_LOG=hailstorm=debug hailstorm throw Day24.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
