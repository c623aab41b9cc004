use super::address::Address;
use crate::core::Currency;
use serde::{Deserialize, Serialize};

/// Per-call order metadata; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOptions {
    pub order_id: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub email: Option<String>,
    /// Shopper reference on the processor side
    pub customer: Option<String>,
    pub description: Option<String>,
    pub ip: Option<String>,
    /// Overrides the gateway's configured currency
    pub currency: Option<Currency>,
}

impl TransactionOptions {
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_billing_address(mut self, address: impl Into<Address>) -> Self {
        self.billing_address = Some(address.into());
        self
    }

    pub fn with_shipping_address(mut self, address: impl Into<Address>) -> Self {
        self.shipping_address = Some(address.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }
}
