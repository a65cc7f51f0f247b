//! Diagnostic logging.
//!
//! Logs go to stderr so stdout carries nothing but banner output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "UPTANE_BANNERS_LOG";

/// Filter used when no environment variable is set.
///
/// `verbosity` is the number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Filter precedence: `UPTANE_BANNERS_LOG` > `RUST_LOG` > `-v` count.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
