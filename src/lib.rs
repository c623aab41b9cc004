//! Barclaycard Smartpay gateway adapter
//!
//! Translates card payment operations (purchase, authorize, capture, refund,
//! void, verify, store) into Smartpay requests and maps the replies into a
//! normalized [`GatewayResponse`]. Captured wire transcripts can be scrubbed of
//! card data and credentials before they are stored.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::{Config, SmartpayConfig};
pub use crate::core::{AppError, Currency, Result};
pub use modules::gateways;
pub use modules::gateways::{
    CreditCard, GatewayResponse, PaymentGateway, SmartpayGateway, TransactionOptions,
};
