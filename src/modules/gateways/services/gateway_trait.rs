use crate::core::{Currency, Result};
use crate::modules::gateways::models::{CreditCard, GatewayResponse, TransactionOptions};
use async_trait::async_trait;

/// Card payment gateway operations
///
/// Amounts are in cents. Every operation resolves to `Ok` with a failed
/// [`GatewayResponse`] for declines and validation problems; `Err` means the
/// processor could not be reached or answered with something unreadable.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize and capture in one call
    async fn purchase(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse>;

    /// Reserve funds; the returned authorization feeds `capture` or `void`
    async fn authorize(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse>;

    /// Settle a prior authorization, fully or partially
    async fn capture(
        &self,
        amount: Option<i64>,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse>;

    /// Return funds against a settled payment, fully or partially
    async fn refund(
        &self,
        amount: Option<i64>,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse>;

    /// Cancel an authorization before capture
    async fn void(
        &self,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse>;

    /// Validate a card with a zero-value authorization that is voided right away
    async fn verify(&self, card: &CreditCard, options: &TransactionOptions)
        -> Result<GatewayResponse>;

    /// Tokenize a card for later reuse
    async fn store(&self, card: &CreditCard, options: &TransactionOptions)
        -> Result<GatewayResponse>;

    /// Redact card data and credentials from a captured wire transcript
    fn scrub(&self, transcript: &str) -> String;

    fn supports_scrubbing(&self) -> bool {
        true
    }

    /// Get gateway name
    fn name(&self) -> &str;

    /// Check if gateway supports a currency
    fn supports_currency(&self, currency: Currency) -> bool;
}
