//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; `RUST_LOG` is used when unset.
pub const LOG_ENV: &str = "STOCKROOM_LOG";

/// Initialize tracing for the process, writing to stderr so console output stays clean.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
