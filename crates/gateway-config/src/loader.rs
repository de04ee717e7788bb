//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use gateway_core::GatewayError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `GATEWAY_` prefix
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a source cannot be parsed or the
    /// merged configuration is invalid.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, GatewayError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::new`].
    pub fn from_default_location() -> Result<Self, GatewayError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Returns the directory the configuration was read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, GatewayError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!(error = %e, "No .env file found or error loading it");
        }

        let environment =
            std::env::var("GATEWAY_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!(environment = %environment, "Loading configuration");

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!(path = %path, "Loading config file");
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("GATEWAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_gateway_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the merged configuration.
///
/// # Errors
///
/// Returns a configuration error describing the first invalid setting.
pub fn validate_config(config: &AppConfig) -> Result<(), GatewayError> {
    let url = config.upstream.users_url.trim();
    if url.is_empty() {
        return Err(GatewayError::Configuration(
            "upstream.users_url is required".to_string(),
        ));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(GatewayError::Configuration(format!(
            "upstream.users_url must start with http:// or https://, got {url}"
        )));
    }

    if config.server.rest_port == 0 {
        return Err(GatewayError::Configuration(
            "server.rest_port must be non-zero".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_gateway_error(err: ConfigError) -> GatewayError {
    GatewayError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogFormat, ServerConfig};
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.rest_port, 3000);
        assert_eq!(config.upstream.users_url, "http://localhost:50051");
        assert!(config.upstream.lazy_connect);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.rest_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_rejects_empty_upstream_url() {
        let mut config = AppConfig::default();
        config.upstream.users_url = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("users_url"));
    }

    #[test]
    fn test_rejects_upstream_url_without_scheme() {
        let mut config = AppConfig::default();
        config.upstream.users_url = "localhost:50051".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.rest_port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_loads_partial_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[upstream]
users_url = "http://users:50051"
lazy_connect = false

[observability]
log_format = "json"
"#,
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        let config = loader.get();
        assert_eq!(config.upstream.users_url, "http://users:50051");
        assert!(!config.upstream.lazy_connect);
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.server.rest_port, 3000);
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[observability]\nlog_format = \"xml\"\n",
        )
        .unwrap();

        let err = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
