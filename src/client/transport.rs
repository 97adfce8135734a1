//! HTTP transport abstraction for the NASA client.
//!
//! The client talks to the network through the [`Transport`] trait so tests
//! can substitute a scripted fake, the same seam the repository trait gives
//! the persistence layer.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Error produced by a single transport request.
///
/// These never escape the client: every lookup failure is absorbed into the
/// fallback-record mechanism after the retry budget runs out.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Non-2xx HTTP status
    #[error("HTTP status {0}")]
    Status(u16),
    /// Connection failure, timeout, or other request error
    #[error("request failed: {0}")]
    Request(String),
    /// Body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Minimal GET-JSON transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform an HTTP GET and decode the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}

/// Production transport backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(request_timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
