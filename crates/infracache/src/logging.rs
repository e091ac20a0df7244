//! Structured logging bootstrap
//!
//! Convenience initialization for binaries embedding the library. The
//! library itself only emits through the `tracing` macros and never installs
//! a global subscriber.

use infracache_domain::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a formatting `tracing` subscriber at the given level.
///
/// The `INFRACACHE_LOG` environment variable overrides `level` with a full
/// `EnvFilter` directive set. Fails if a global subscriber is already
/// installed.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_env("INFRACACHE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install subscriber: {e}")))
}

/// Parse a log level string to a tracing [`Level`]
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
