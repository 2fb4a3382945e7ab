//! Tracing setup: JSON subscriber, span definitions, and event helpers.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use cadence_core::config::ObservabilityConfig;

/// Env var consulted for the filter directive.
pub const LOG_ENV_VAR: &str = "CADENCE_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `CADENCE_LOG`; defaults to `info`. Panics if a global
/// subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .init();
}

/// Initialize from [`ObservabilityConfig`]. `CADENCE_LOG` still wins over
/// `log_level`. Returns `false` if a subscriber was already installed.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}
