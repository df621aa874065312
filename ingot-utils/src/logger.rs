//! Logging setup.
//!
//! Library code logs through the `log` facade. [`init`] installs a
//! `tracing-subscriber` formatter and bridges `log` records into it.

use log::SetLoggerError;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Environment variable read for filter directives, e.g. `INGOT_LOG=ingot_core=trace`.
pub const LOG_ENV: &str = "INGOT_LOG";

/// Errors raised while installing the global logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The `log` to `tracing` bridge was already installed.
    #[error("failed to install the log bridge: {0}")]
    Bridge(#[from] SetLoggerError),
    /// Another global subscriber was already set.
    #[error("failed to install the tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber.
///
/// `default_directive` is used when [`LOG_ENV`] is unset or invalid.
pub fn init(default_directive: &str) -> Result<(), LoggerError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_target(true)
        .finish();

    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    log::debug!("Logger initialized");
    Ok(())
}

/// Installs a subscriber that writes through the test harness capture.
///
/// Safe to call from every test; only the first call in a process has an effect.
pub fn init_for_tests() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter("debug"))
        .with_test_writer()
        .finish();

    if tracing_log::LogTracer::init().is_ok() {
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_test_init_is_harmless() {
        init_for_tests();
        init_for_tests();
        log::info!("still logging");
    }

    #[test]
    fn second_global_init_reports_an_error() {
        init_for_tests();
        assert!(init("info").is_err());
    }
}
