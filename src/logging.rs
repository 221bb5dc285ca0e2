// src/logging.rs
use std::io::{self, IsTerminal as _};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MAN_FILES_LOG=debug`.
pub const LOG_ENV_VAR: &str = "MAN_FILES_LOG";

/// Installs the global subscriber.
///
/// Diagnostics go to standard error so they never mix with the listing on
/// standard output. Logging stays off unless [`LOG_ENV_VAR`] is set.
#[inline]
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
