use crate::core::{AppError, Currency, Result};
use std::env;

pub mod gateway;
pub mod logging;

pub use gateway::{GatewayEnvironment, SmartpayConfig};
pub use logging::init_tracing;

/// Tracing filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "smartpay=debug";

/// Main adapter configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub smartpay: SmartpayConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    /// `EnvFilter` directive handed to [`init_tracing`]
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Blank or missing merchant credentials are accepted here; the gateway
    /// reports them as a failed response on the first call instead.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let environment = match env::var("SMARTPAY_ENV") {
            Ok(value) => value.parse().map_err(AppError::Configuration)?,
            Err(_) => GatewayEnvironment::Test,
        };

        let currency = match env::var("SMARTPAY_CURRENCY") {
            Ok(value) => value.parse::<Currency>().map_err(AppError::Configuration)?,
            Err(_) => Currency::default(),
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            },
            smartpay: SmartpayConfig {
                company: env::var("SMARTPAY_COMPANY").unwrap_or_default(),
                merchant: env::var("SMARTPAY_MERCHANT").unwrap_or_default(),
                password: env::var("SMARTPAY_PASSWORD").unwrap_or_default().into(),
                environment,
                base_url: env::var("SMARTPAY_BASE_URL").ok(),
                timeout_secs: env::var("SMARTPAY_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::configuration("Invalid SMARTPAY_TIMEOUT_SECS")
                    })?,
                currency,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.smartpay.validate()
    }
}
