//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `TAROT_LOG=debug`.
const LOG_ENV: &str = "TAROT_LOG";

/// Install the stderr subscriber. `TAROT_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
