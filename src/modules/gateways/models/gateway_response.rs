use super::avs_result::AvsResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized outcome of one gateway operation
///
/// Declines, validation failures and rejected credentials all produce a
/// response with `success == false`; the message is the processor's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub success: bool,
    pub message: String,
    /// Opaque reference for capture/refund/void
    pub authorization: Option<String>,
    pub avs_result: Option<AvsResult>,
    /// Decoded reply parameters as sent by the processor
    pub params: BTreeMap<String, String>,
    pub test: bool,
}

impl GatewayResponse {
    pub fn new(
        success: bool,
        message: impl Into<String>,
        params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            success,
            message: message.into(),
            authorization: None,
            avs_result: None,
            params,
            test: false,
        }
    }

    /// Failed response that never reached the processor, or carries no reply body
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message, BTreeMap::new())
    }

    pub fn with_authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization;
        self
    }

    pub fn with_avs_result(mut self, avs_result: Option<AvsResult>) -> Self {
        self.avs_result = avs_result;
        self
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// AVS code, if the processor returned an AVS check
    pub fn avs_code(&self) -> Option<&str> {
        self.avs_result.as_ref().map(|avs| avs.code.as_str())
    }
}

/// Runs dependent gateway steps and picks the response a caller should see
///
/// Once the primary response has failed no further step runs. The primary response is the
/// last non-ignored step, or the first successful one when built with
/// [`ResponseChain::use_first_response`].
#[derive(Debug, Default)]
pub struct ResponseChain {
    responses: Vec<GatewayResponse>,
    primary: Option<usize>,
    use_first_response: bool,
}

impl ResponseChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_first_response() -> Self {
        Self {
            use_first_response: true,
            ..Self::default()
        }
    }

    /// True while the primary response (if any) succeeded
    pub fn is_success(&self) -> bool {
        self.primary().map_or(true, |r| r.success)
    }

    /// Authorization of the current primary response
    pub fn authorization(&self) -> Option<&str> {
        self.primary().and_then(|r| r.authorization.as_deref())
    }

    pub fn primary(&self) -> Option<&GatewayResponse> {
        self.primary.map(|i| &self.responses[i])
    }

    pub fn responses(&self) -> &[GatewayResponse] {
        &self.responses
    }

    /// Record a step; `ignore_result` keeps it from becoming the primary response
    pub fn record(&mut self, response: GatewayResponse, ignore_result: bool) {
        let success = response.success;
        self.responses.push(response);
        if ignore_result {
            return;
        }
        let index = self.responses.len() - 1;
        if self.use_first_response && success {
            self.primary.get_or_insert(index);
        } else {
            self.primary = Some(index);
        }
    }

    pub fn into_response(mut self) -> GatewayResponse {
        match self.primary {
            Some(i) => self.responses.swap_remove(i),
            None => GatewayResponse::failure("Failure"),
        }
    }
}
