// Smartpay Sandbox Helpers
//
// MockSmartpay runs a wiremock server that answers like the Smartpay test
// environment, so the real gateway (HTTP transport included) can be exercised
// offline. remote_gateway() builds a gateway against the real test
// environment from SMARTPAY_* variables.

use super::test_data::*;
use base64::prelude::*;
use smartpay::config::Config;
use smartpay::gateways::{HttpTransport, RecordingTransport, SmartpayGateway};
use smartpay::SmartpayConfig;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const SERVLET: &str = "/pal/servlet";

pub const AUTH_REFERENCE: &str = "8814591938804745";
pub const DECLINED_REFERENCE: &str = "8814591938804746";
pub const CAPTURE_REFERENCE: &str = "8814591938821234";
pub const REFUND_REFERENCE: &str = "8814591938839876";
pub const CANCEL_REFERENCE: &str = "8814591938845555";
pub const RECURRING_REFERENCE: &str = "8414591939280316";

/// Smartpay replies as the test environment sends them
pub struct SmartpayReplies;

impl SmartpayReplies {
    pub fn authorised() -> String {
        format!("pspReference={}&resultCode=Authorised&authCode=83152", AUTH_REFERENCE)
    }

    pub fn refused() -> String {
        format!(
            "pspReference={}&refusalReason=Refused&resultCode=Refused",
            DECLINED_REFERENCE
        )
    }

    pub fn authorised_with_avs() -> String {
        format!(
            "additionalData.avsResult=2+Neither+postal+code+nor+address+match&pspReference={}&resultCode=Authorised&authCode=83153",
            AUTH_REFERENCE
        )
    }

    pub fn capture_received() -> String {
        format!("pspReference={}&response=%5Bcapture-received%5D", CAPTURE_REFERENCE)
    }

    pub fn refund_received() -> String {
        format!("pspReference={}&response=%5Brefund-received%5D", REFUND_REFERENCE)
    }

    pub fn cancel_received() -> String {
        format!("pspReference={}&response=%5Bcancel-received%5D", CANCEL_REFERENCE)
    }

    pub fn stored() -> String {
        format!(
            "alias=H167852639363479&aliasType=Default&pspReference=8814591939276781&recurringDetailReference={}&result=Success",
            RECURRING_REFERENCE
        )
    }
}

/// wiremock stand-in for the Smartpay servlet
pub struct MockSmartpay {
    server: MockServer,
}

impl MockSmartpay {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Base URL the gateway should post to
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), SERVLET)
    }

    pub fn config(&self) -> SmartpayConfig {
        SmartpayConfig::new(COMPANY, MERCHANT, PASSWORD).with_base_url(self.endpoint())
    }

    pub fn gateway(&self) -> SmartpayGateway {
        self.gateway_with(self.config())
    }

    pub fn gateway_with(&self, config: SmartpayConfig) -> SmartpayGateway {
        SmartpayGateway::new(config).expect("Failed to build Smartpay gateway")
    }

    /// Gateway whose wire traffic is recorded for scrubbing tests
    pub fn recording_gateway(
        &self,
    ) -> (SmartpayGateway, Arc<RecordingTransport<HttpTransport>>) {
        let transport = HttpTransport::new(Duration::from_secs(5))
            .expect("Failed to build HTTP transport");
        let recorder = Arc::new(RecordingTransport::new(transport));
        let gateway = SmartpayGateway::with_transport(self.config(), recorder.clone());
        (gateway, recorder)
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Request bodies received so far, in order
    pub async fn bodies(&self) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .map(|r| String::from_utf8_lossy(&r.body).into_owned())
            .collect()
    }

    pub async fn mount_reply(
        &self,
        endpoint: &str,
        card_number: Option<&str>,
        status: u16,
        body: String,
    ) {
        let mut mock = Mock::given(method("POST")).and(path(format!("{}/{}", SERVLET, endpoint)));
        if let Some(number) = card_number {
            mock = mock.and(body_string_contains(format!("card.number={}", number)));
        }
        mock.respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Replies for every card and modification the fixtures use
    pub async fn mount_happy_path(&self) {
        let replies = [
            ("Payment/v12/authorise", Some(CARD_NUMBER), SmartpayReplies::authorised()),
            ("Payment/v12/authorise", Some(DECLINED_CARD_NUMBER), SmartpayReplies::refused()),
            ("Payment/v12/authorise", Some(AVS_CARD_NUMBER), SmartpayReplies::authorised_with_avs()),
            ("Payment/v12/capture", None, SmartpayReplies::capture_received()),
            ("Payment/v12/refund", None, SmartpayReplies::refund_received()),
            ("Payment/v12/cancel", None, SmartpayReplies::cancel_received()),
            ("Recurring/v12/storeToken", Some(CARD_NUMBER), SmartpayReplies::stored()),
        ];
        for (endpoint, card_number, body) in replies {
            self.mount_reply(endpoint, card_number, 200, body).await;
        }

        // Any other card is structurally invalid for the recurring API
        Mock::given(method("POST"))
            .and(path(format!("{}/Recurring/v12/storeToken", SERVLET)))
            .respond_with(ResponseTemplate::new(422).set_body_string("Unprocessable Entity"))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Answer 401 to requests signed with these credentials
    pub async fn mount_rejected_credentials(&self, company: &str, password: &str) {
        let credential = BASE64_STANDARD.encode(format!("ws@Company.{}:{}", company, password));
        Mock::given(method("POST"))
            .and(header("Authorization", format!("Basic {}", credential).as_str()))
            .respond_with(ResponseTemplate::new(401).set_body_string("HTTP Status 401"))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }
}

/// Gateway for the real Smartpay test environment, if credentials are configured
pub fn remote_gateway() -> Option<SmartpayGateway> {
    let config = Config::from_env().ok()?;
    if !config.smartpay.has_credentials() {
        eprintln!(
            "Warning: SMARTPAY_COMPANY, SMARTPAY_MERCHANT or SMARTPAY_PASSWORD not set. \
             Set them in .env.test for real Smartpay sandbox testing."
        );
        return None;
    }
    SmartpayGateway::new(config.smartpay).ok()
}
