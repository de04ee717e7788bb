//! Logging initialization.

use gateway_config::{LogFormat, ObservabilityConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.log_level)))
}

/// Installs the global subscriber in the configured format.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = build_filter(config);

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        let config = ObservabilityConfig {
            log_level: "warn".to_string(),
            log_format: LogFormat::Json,
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(build_filter(&config).to_string().contains("warn"));
        }
    }
}
