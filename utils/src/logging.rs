//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable for filtering and writes
/// through the test harness's captured output. Returns `false` instead of
/// panicking when a subscriber is already installed, so test and bench
/// binaries can call it from every entry point.
pub fn try_init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .is_ok()
}
