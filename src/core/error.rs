/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the gateway adapter
///
/// Processor declines and validation failures are not errors: they come back as
/// a failed [`GatewayResponse`](crate::gateways::GatewayResponse). `AppError` is
/// reserved for conditions where no processor reply can be normalized.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Payment gateway errors (unexpected status, unreadable reply)
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
