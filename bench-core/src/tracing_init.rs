//! Tracing initialization for the harness utilities
//!
//! Callers that want the `debug!`/`warn!` events emitted by the helpers
//! install a subscriber once at startup through this module.

use crate::error::{BenchError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with environment-based configuration
///
/// Uses standard RUST_LOG environment variable for filtering:
/// - `RUST_LOG=debug` - Set global level
/// - `RUST_LOG=bench_util=debug,bench_core=info` - Set per-module levels
///
/// Uses RUST_LOG_FORMAT for output format (optional):
/// - `json` - JSON formatted output
/// - `pretty` - Pretty formatted output (default)
/// - `compact` - Compact single-line output
pub fn init() -> Result<()> {
    init_with_defaults("info")
}

/// Initialize with a default filter if RUST_LOG is not set
///
/// # Arguments
/// * `default_filter` - The filter string to use if RUST_LOG is not set (e.g., "info", "debug")
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format.as_str() {
        "json" => registry.with(fmt::layer().with_ansi(false).json()).try_init(),
        "compact" => registry.with(fmt::layer().compact()).try_init(),
        _ => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| BenchError::Other(anyhow::anyhow!("Failed to initialize tracing: {}", e)))
}

/// Initialize for testing with a specific configuration
#[cfg(test)]
pub fn init_for_testing() -> Result<()> {
    let env_filter = EnvFilter::new("debug");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init()
        .map_err(|e| {
            BenchError::Other(anyhow::anyhow!("Failed to initialize test tracing: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info_span, warn};

    #[test]
    fn test_tracing_initialization() {
        // Only the first initialization in a process succeeds
        if init_for_testing().is_ok() {
            debug!("Test debug message");
            warn!(retval = 1, "Test warning message");

            let span = info_span!("energy_sample", domain = "cpu");
            let _enter = span.enter();
            debug!("Message within span");
        }
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_for_testing();
        assert!(init_with_defaults("debug").is_err());
    }
}
