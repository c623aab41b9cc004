use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Write as _;
use std::time::Duration;
use tokio::sync::Mutex;

/// Status and body of one HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam between the gateway and the network
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST an already encoded form body with the given headers
    async fn post_form(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<RawResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<RawResponse> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AppError::gateway(format!(
                    "Smartpay gateway unavailable: {} ({})",
                    if e.is_timeout() {
                        "timeout"
                    } else {
                        "connection failed"
                    },
                    e
                ))
            } else {
                AppError::gateway(format!("Smartpay API request failed: {}", e))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read Smartpay response: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}

/// Transport decorator that keeps a wire-style transcript of every exchange
///
/// The transcript holds credentials and card data in clear text; pass it
/// through [`PaymentGateway::scrub`](super::PaymentGateway::scrub) before storing it.
#[derive(Debug)]
pub struct RecordingTransport<T> {
    inner: T,
    transcript: Mutex<String>,
}

impl<T: Transport> RecordingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            transcript: Mutex::new(String::new()),
        }
    }

    /// Everything recorded so far
    pub async fn transcript(&self) -> String {
        self.transcript.lock().await.clone()
    }

    /// Returns the transcript and starts a new one
    pub async fn take_transcript(&self) -> String {
        std::mem::take(&mut *self.transcript.lock().await)
    }
}

#[async_trait]
impl<T: Transport> Transport for RecordingTransport<T> {
    async fn post_form(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<RawResponse> {
        let parsed = url::Url::parse(url)
            .map_err(|e| AppError::internal(format!("Invalid gateway URL {}: {}", url, e)))?;

        let mut request = String::new();
        let _ = writeln!(request, "-> \"POST {} HTTP/1.1\"", parsed.path());
        if let Some(host) = parsed.host_str() {
            let _ = writeln!(request, "-> \"Host: {}\"", host);
        }
        for (name, value) in headers {
            let _ = writeln!(request, "-> \"{}: {}\"", name, value);
        }
        let _ = writeln!(request, "-> \"{}\"", body);

        let result = self.inner.post_form(url, headers, body).await;

        let mut transcript = self.transcript.lock().await;
        transcript.push_str(&request);
        match &result {
            Ok(response) => {
                let _ = writeln!(transcript, "<- \"HTTP/1.1 {}\"", response.status);
                let _ = writeln!(transcript, "<- \"{}\"", response.body);
            }
            Err(e) => {
                let _ = writeln!(transcript, "<- error: {}", e);
            }
        }

        result
    }
}
