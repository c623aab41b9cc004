use super::gateway_trait::PaymentGateway;
use super::scrubber;
use super::smartpay_codec::{encode_form, flatten, parse_reply};
use super::transport::{HttpTransport, RawResponse, Transport};
use crate::config::{GatewayEnvironment, SmartpayConfig};
use crate::core::{AppError, Currency, Result};
use crate::modules::gateways::models::{
    AvsResult, CreditCard, GatewayResponse, ResponseChain, TransactionOptions,
};
use async_trait::async_trait;
use base64::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const API_VERSION: &str = "v12";

/// Amount authorized (and voided) by `verify`
pub const VERIFY_AMOUNT: i64 = 0;

const SUCCESSFUL_RESPONSES: [&str; 3] = [
    "[capture-received]",
    "[cancel-received]",
    "[refund-received]",
];
const SUCCESSFUL_RESULTS: [&str; 4] = [
    "Authorised",
    "Received",
    "[all-details-successfully-disabled]",
    "Success",
];

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const UNPROCESSABLE_ENTITY: &str = "Unprocessable Entity";
const MISSING_REFERENCE: &str = "Missing original reference";
const MISSING_AMOUNT: &str = "Missing amount";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Authorise,
    Capture,
    Refund,
    Cancel,
    Store,
}

impl Action {
    fn path(&self) -> String {
        match self {
            Action::Store => format!("Recurring/{}/storeToken", API_VERSION),
            other => format!("Payment/{}/{}", API_VERSION, other),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Authorise => "authorise",
            Action::Capture => "capture",
            Action::Refund => "refund",
            Action::Cancel => "cancel",
            Action::Store => "store",
        };
        f.write_str(name)
    }
}

/// Barclaycard Smartpay gateway client
///
/// Implements PaymentGateway over the Smartpay (Adyen) form-post API.
/// Holds only read-only credentials and a shared transport, so one instance
/// can serve concurrent callers.
pub struct SmartpayGateway {
    config: SmartpayConfig,
    transport: Arc<dyn Transport>,
}

impl SmartpayGateway {
    /// Create a gateway that talks to Smartpay over HTTPS
    ///
    /// Blank credentials are accepted; every call then fails with
    /// `"Invalid credentials"`.
    pub fn new(config: SmartpayConfig) -> Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a gateway on top of a custom transport (recording, proxies)
    pub fn with_transport(config: SmartpayConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SmartpayConfig {
        &self.config
    }

    pub fn is_test(&self) -> bool {
        self.config.environment == GatewayEnvironment::Test
    }

    fn currency(&self, options: &TransactionOptions) -> Currency {
        options.currency.unwrap_or(self.config.currency)
    }

    fn headers(&self) -> Vec<(String, String)> {
        let credential = BASE64_STANDARD.encode(format!(
            "ws@Company.{}:{}",
            self.config.company,
            self.config.password.as_str()
        ));
        vec![
            (
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded; charset=utf-8".to_string(),
            ),
            ("Authorization".to_string(), format!("Basic {}", credential)),
        ]
    }

    fn amount_hash(amount: i64, currency: Currency) -> Value {
        json!({
            "currency": currency.to_string(),
            "value": currency.localized_amount(amount),
        })
    }

    fn card_hash(card: &CreditCard) -> Value {
        json!({
            "number": card.number,
            "expiryMonth": card.month.map(|_| card.formatted_month()),
            "expiryYear": card.year.map(|_| card.formatted_year()),
            "cvc": card.verification_value,
            "holderName": card.holder_name,
        })
    }

    fn payment_request(&self, options: &TransactionOptions) -> Map<String, Value> {
        let mut request = Map::new();
        request.insert("merchantAccount".into(), self.config.merchant.clone().into());
        insert_opt(&mut request, "reference", &options.order_id);
        insert_opt(&mut request, "shopperEmail", &options.email);
        insert_opt(&mut request, "shopperIP", &options.ip);
        insert_opt(&mut request, "shopperReference", &options.customer);
        request
    }

    fn modification_request(&self, authorization: &str) -> Map<String, Value> {
        let mut request = Map::new();
        request.insert("merchantAccount".into(), self.config.merchant.clone().into());
        request.insert(
            "originalReference".into(),
            original_reference(authorization).into(),
        );
        request
    }

    fn store_request(&self, options: &TransactionOptions) -> Map<String, Value> {
        let mut request = Map::new();
        request.insert("merchantAccount".into(), self.config.merchant.clone().into());
        insert_opt(&mut request, "shopperEmail", &options.email);
        insert_opt(&mut request, "shopperReference", &options.customer);
        request
    }

    fn failure(&self, message: &str) -> GatewayResponse {
        GatewayResponse::failure(message).with_test(self.is_test())
    }

    /// Capture, refund and cancel share this request shape
    async fn modify(
        &self,
        action: Action,
        amount: Option<i64>,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let Some(authorization) = authorization.filter(|a| !a.trim().is_empty()) else {
            warn!(gateway = %self.name(), action = %action, "Missing original reference");
            return Ok(self.failure(MISSING_REFERENCE));
        };

        let mut request = self.modification_request(authorization);
        if matches!(action, Action::Capture | Action::Refund) {
            let Some(amount) = amount else {
                warn!(gateway = %self.name(), action = %action, "Missing modification amount");
                return Ok(self.failure(MISSING_AMOUNT));
            };
            let currency = self.currency(options);
            if let Err(message) = currency.validate_amount(amount) {
                warn!(gateway = %self.name(), action = %action, %message, "Rejected modification amount");
                return Ok(self.failure(&message));
            }
            request.insert(
                "modificationAmount".into(),
                Self::amount_hash(amount, currency),
            );
            debug!(gateway = %self.name(), action = %action, amount, "Modification amount set");
        }

        self.commit(action, Value::Object(request)).await
    }

    async fn commit(&self, action: Action, request: Value) -> Result<GatewayResponse> {
        if !self.config.has_credentials() {
            warn!(gateway = %self.name(), action = %action, "Smartpay credentials are blank");
            return Ok(self.failure(INVALID_CREDENTIALS));
        }

        let url = format!("{}/{}", self.config.endpoint(), action.path());
        let body = encode_form(&flatten(&request));

        info!(gateway = %self.name(), action = %action, "Sending request to Smartpay");

        let raw = self
            .transport
            .post_form(&url, &self.headers(), body)
            .await
            .inspect_err(|e| {
                error!(gateway = %self.name(), action = %action, error = %e, "Smartpay request failed")
            })?;

        let response = self.response_from(action, raw)?;
        if response.success {
            info!(
                gateway = %self.name(),
                action = %action,
                message = %response.message,
                authorization = ?response.authorization,
                "Smartpay request succeeded"
            );
        } else {
            warn!(
                gateway = %self.name(),
                action = %action,
                message = %response.message,
                "Smartpay request declined"
            );
        }
        Ok(response)
    }

    fn response_from(&self, action: Action, raw: RawResponse) -> Result<GatewayResponse> {
        if raw.is_success() {
            let params = parse_reply(&raw.body);
            let authorization = authorization_from(&params);
            let avs_result = params
                .get("additionalData.avsResult")
                .and_then(|value| AvsResult::from_smartpay(value));
            let success = success_from(&params);
            let message = message_from(&params);
            return Ok(GatewayResponse::new(success, message, params)
                .with_authorization(authorization)
                .with_avs_result(avs_result)
                .with_test(self.is_test()));
        }

        match raw.status {
            401 => Ok(self.failure(INVALID_CREDENTIALS)),
            422 => Ok(self.failure(UNPROCESSABLE_ENTITY)),
            500 if raw.body.split(' ').next() == Some("validation") => {
                let message = raw.body.splitn(3, ' ').nth(2).unwrap_or_default().trim();
                Ok(self.failure(message))
            }
            status => Err(AppError::gateway(format!(
                "Smartpay API error on {} - HTTP {} ({})",
                action, status, raw.body
            ))),
        }
    }
}

#[async_trait]
impl PaymentGateway for SmartpayGateway {
    async fn purchase(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let mut chain = ResponseChain::new();
        chain.record(self.authorize(amount, card, options).await?, false);
        if chain.is_success() {
            let authorization = chain.authorization().map(str::to_string);
            let capture = self
                .capture(Some(amount), authorization.as_deref(), options)
                .await?;
            chain.record(capture, false);
        }
        Ok(chain.into_response())
    }

    async fn authorize(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let currency = self.currency(options);
        if let Err(message) = currency.validate_amount(amount) {
            warn!(gateway = %self.name(), %message, "Rejected authorization amount");
            return Ok(self.failure(&message));
        }

        debug!(
            gateway = %self.name(),
            amount = %currency.format_amount(amount),
            card = %card.last_digits(),
            "Authorizing card"
        );

        let mut request = self.payment_request(options);
        request.insert("amount".into(), Self::amount_hash(amount, currency));
        request.insert("card".into(), Self::card_hash(card));
        if let Some(address) = &options.billing_address {
            request.insert("billingAddress".into(), address.to_wire());
        }
        if let Some(address) = &options.shipping_address {
            request.insert("deliveryAddress".into(), address.to_wire());
        }

        self.commit(Action::Authorise, Value::Object(request)).await
    }

    async fn capture(
        &self,
        amount: Option<i64>,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        self.modify(Action::Capture, amount, authorization, options)
            .await
    }

    async fn refund(
        &self,
        amount: Option<i64>,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        self.modify(Action::Refund, amount, authorization, options)
            .await
    }

    async fn void(
        &self,
        authorization: Option<&str>,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        self.modify(Action::Cancel, None, authorization, options).await
    }

    async fn verify(
        &self,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let mut chain = ResponseChain::use_first_response();
        chain.record(self.authorize(VERIFY_AMOUNT, card, options).await?, false);
        if chain.is_success() {
            let authorization = chain.authorization().map(str::to_string);
            let void = self.void(authorization.as_deref(), options).await?;
            chain.record(void, true);
        }
        Ok(chain.into_response())
    }

    async fn store(
        &self,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let mut request = self.store_request(options);
        request.insert("card".into(), Self::card_hash(card));
        request.insert("recurring".into(), json!({ "contract": "RECURRING" }));

        self.commit(Action::Store, Value::Object(request)).await
    }

    fn scrub(&self, transcript: &str) -> String {
        scrubber::scrub(transcript)
    }

    fn name(&self) -> &str {
        "barclaycard_smartpay"
    }

    fn supports_currency(&self, currency: Currency) -> bool {
        // Every Currency variant is a Smartpay settlement currency
        matches!(
            currency,
            Currency::EUR
                | Currency::GBP
                | Currency::USD
                | Currency::CAD
                | Currency::CHF
                | Currency::JPY
                | Currency::KRW
        )
    }
}

fn insert_opt(request: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        request.insert(key.to_string(), value.clone().into());
    }
}

/// The part of an authorization token the processor knows about
fn original_reference(authorization: &str) -> &str {
    authorization.split('#').next().unwrap_or(authorization)
}

fn success_from(params: &BTreeMap<String, String>) -> bool {
    if params.contains_key("authCode") {
        return true;
    }
    let response_ok = params
        .get("response")
        .is_some_and(|r| SUCCESSFUL_RESPONSES.contains(&r.as_str()));
    // Payment replies carry `resultCode`, recurring replies carry `result`
    let result_ok = ["resultCode", "result"].iter().any(|key| {
        params
            .get(*key)
            .is_some_and(|r| SUCCESSFUL_RESULTS.contains(&r.as_str()))
    });
    response_ok || result_ok
}

fn message_from(params: &BTreeMap<String, String>) -> String {
    params
        .get("resultCode")
        .or_else(|| params.get("response"))
        .or_else(|| params.get("result"))
        .cloned()
        .unwrap_or_else(|| "Failure".to_string())
}

fn authorization_from(params: &BTreeMap<String, String>) -> Option<String> {
    params
        .get("recurringDetailReference")
        .or_else(|| params.get("pspReference"))
        .cloned()
}
