use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingSettings;

/// Install the global tracing subscriber according to the logging settings.
///
/// A `RUST_LOG` value in the environment overrides `settings.level`. Fails
/// when a subscriber is already installed; embedders that own their own
/// logging setup simply skip this call.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if settings.enable_json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    if result.is_ok() {
        tracing::info!(
            level = %settings.level,
            json_format = settings.enable_json,
            "Logging initialized"
        );
    }
    result
}
