//! Tracing setup: structured logging with span definitions.

pub mod spans;

use exemplar_core::config::ObservabilityConfig;
use exemplar_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects the `EXEMPLAR_LOG` environment variable for filtering and falls
/// back to `config.log_level`. Panics if a global subscriber is already set;
/// use [`try_init_tracing`] when that can happen.
pub fn init_tracing(config: &ObservabilityConfig) {
    if let Err(e) = try_init_tracing(config) {
        panic!("failed to install tracing subscriber: {e}");
    }
}

/// Like [`init_tracing`], but reports an already-installed subscriber as an error.
pub fn try_init_tracing(
    config: &ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize tracing with an explicit filter string (for testing or embedding).
pub fn try_init_tracing_with_filter(
    filter: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    install(EnvFilter::new(filter), json)
}

fn install(
    filter: EnvFilter,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}
