//! Diagnostic logging to standard error.
//!
//! Standard output carries nothing but passphrases, so every event goes to
//! stderr through a non-blocking writer. The filter comes from
//! `CORRECTHORSE_LOG` (e.g. `debug`) and defaults to `warn`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CORRECTHORSE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit: dropping it flushes pending
/// events.
#[must_use]
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (tests); the first one wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    guard
}
