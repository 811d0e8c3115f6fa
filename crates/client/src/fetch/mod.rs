//! Raw HTTP transport.
//!
//! [`Transport`] is the seam between the execution service and the network:
//! one async GET returning the raw body bytes. [`HttpTransport`] is the real
//! implementation on reqwest; tests substitute an in-memory stub through the
//! same trait.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header;
use url::Url;

use morty_core::AppConfig;

use crate::api::ApiError;

/// A single GET round-trip returning the raw response body.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Fetch `url`, returning the body bytes of a successful response.
    ///
    /// Non-success statuses, timeouts, and connection failures all surface
    /// as errors; the body is only read for 2xx responses.
    async fn get(&self, url: &Url) -> Result<Bytes, ApiError>;
}

/// HTTP transport backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with timeout and user agent taken from `config`.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| ApiError::Network(Arc::new(e)))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Bytes, ApiError> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http { status: status.as_u16() });
        }

        let body = response.bytes().await?;

        tracing::debug!("GET {} -> {} in {:?} ({} bytes)", url, status, start.elapsed(), body.len());

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_new() {
        let config = AppConfig::default();
        let transport = HttpTransport::new(&config);
        assert!(transport.is_ok());
    }
}
