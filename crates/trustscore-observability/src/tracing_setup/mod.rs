//! Subscriber initialisation.

pub mod spans;

use tracing_subscriber::EnvFilter;
use trustscore_core::config::ObservabilityConfig;
use trustscore_core::errors::{TrustError, TrustResult};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides `config.log_level` when set. Calling this twice
/// returns [`TrustError::TracingInit`] rather than panicking.
pub fn init_tracing(config: &ObservabilityConfig) -> TrustResult<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TrustError::TracingInit {
        reason: e.to_string(),
    })
}

/// Build the env filter, preferring `RUST_LOG` over the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> TrustResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|e| TrustError::TracingInit {
        reason: format!("invalid log level {:?}: {e}", config.log_level),
    })
}
