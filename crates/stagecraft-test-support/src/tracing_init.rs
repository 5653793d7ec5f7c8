//! Tracing initialization for tests.

use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber for a test binary.
///
/// Honors `RUST_LOG` and defaults to `debug` for the engine crates. Safe to
/// call from every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stagecraft=debug")),
        )
        .with_test_writer()
        .try_init();
}
