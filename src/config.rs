use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use tracing::info;
use validator::Validate;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;
const CONFIG_DIR: &str = "config";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Deployment environment name ("development", "production", ...)
    pub environment: String,

    /// Log level filter used when RUST_LOG is not set
    pub log_level: String,

    /// ISO 4217 currency code applied to new carts
    #[validate(length(min = 3, max = 3))]
    pub currency: String,

    /// Flat shipping rate charged below the free-shipping threshold
    pub flat_shipping_rate: Decimal,

    /// Cart subtotal at or above which shipping is free
    pub free_shipping_threshold: Decimal,

    /// Buffer size of the in-process event channel
    pub event_buffer_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENV.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            flat_shipping_rate: Decimal::from(10),
            free_shipping_threshold: Decimal::from(50),
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `config/default`, an environment-specific
    /// overlay, and `APP_`-prefixed environment variables, then validates it.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

        let config: AppConfig = Config::builder()
            .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
            .add_source(
                File::with_name(&format!("{}/{}", CONFIG_DIR, environment)).required(false),
            )
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        config
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        info!(environment = %config.environment, "loaded configuration");
        Ok(config)
    }
}
