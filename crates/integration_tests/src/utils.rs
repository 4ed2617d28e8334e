//! Shared helpers for integration tests.

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Initialize test logging once per process.
///
/// Honors `RUST_LOG`; defaults to `warn` so passing runs stay quiet. Output
/// goes through the test writer and is only shown for failing tests.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}
