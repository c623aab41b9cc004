use crate::core::{AppError, Currency, Result};
use std::fmt;
use zeroize::Zeroizing;

pub const TEST_URL: &str = "https://pal-test.barclaycardsmartpay.com/pal/servlet";
pub const LIVE_URL: &str = "https://pal-live.barclaycardsmartpay.com/pal/servlet";

/// Smartpay environment, selects the processor endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayEnvironment {
    #[default]
    Test,
    Live,
}

impl fmt::Display for GatewayEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayEnvironment::Test => write!(f, "test"),
            GatewayEnvironment::Live => write!(f, "live"),
        }
    }
}

impl std::str::FromStr for GatewayEnvironment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" | "sandbox" => Ok(GatewayEnvironment::Test),
            "live" | "production" => Ok(GatewayEnvironment::Live),
            _ => Err(format!("Invalid SMARTPAY_ENV: {}", s)),
        }
    }
}

/// Merchant credentials and endpoint settings for Barclaycard Smartpay
#[derive(Clone)]
pub struct SmartpayConfig {
    /// Company account code, used in the web-service user `ws@Company.<company>`
    pub company: String,
    /// Merchant account the payments are booked on
    pub merchant: String,
    pub password: Zeroizing<String>,
    pub environment: GatewayEnvironment,
    /// Overrides the endpoint chosen by `environment`
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub currency: Currency,
}

impl SmartpayConfig {
    pub fn new(
        company: impl Into<String>,
        merchant: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            merchant: merchant.into(),
            password: Zeroizing::new(password.into()),
            environment: GatewayEnvironment::Test,
            base_url: None,
            timeout_secs: 30,
            currency: Currency::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_environment(mut self, environment: GatewayEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Endpoint the gateway posts to, without a trailing slash
    pub fn endpoint(&self) -> String {
        let url = match (&self.base_url, self.environment) {
            (Some(url), _) => url.as_str(),
            (None, GatewayEnvironment::Test) => TEST_URL,
            (None, GatewayEnvironment::Live) => LIVE_URL,
        };
        url.trim_end_matches('/').to_string()
    }

    /// All three credentials are present and non-blank
    pub fn has_credentials(&self) -> bool {
        !self.company.trim().is_empty()
            && !self.merchant.trim().is_empty()
            && !self.password.trim().is_empty()
    }

    /// Checks settings that would break every call; credentials are not checked
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::configuration(
                "Smartpay timeout must be greater than 0",
            ));
        }

        if let Some(url) = &self.base_url {
            url::Url::parse(url).map_err(|e| {
                AppError::configuration(format!("Invalid SMARTPAY_BASE_URL {}: {}", url, e))
            })?;
        }

        Ok(())
    }
}

impl fmt::Debug for SmartpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartpayConfig")
            .field("company", &self.company)
            .field("merchant", &self.merchant)
            .field("password", &"[FILTERED]")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("currency", &self.currency)
            .finish()
    }
}
