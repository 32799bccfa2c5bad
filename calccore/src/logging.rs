//! Tracing setup shared by calculator binaries.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_target(false)
        .try_init();
}
