use crate::config::UpstreamConfig;
use crate::errors::{GatewayError, Result};
use std::time::Duration;
use tokio::time::timeout;

/// HTTP client for the app catalog backend.
///
/// Holds the immutable base URL and a shared `reqwest::Client`; the
/// configuration is injected at construction and never changes
/// afterwards.
#[derive(Clone)]
pub struct AppServiceClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AppServiceClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Builds the outbound search URL.
    ///
    /// The backend contract is byte-for-byte concatenation: the keyword
    /// is passed through unencoded. A keyword containing `&`, `#`, or
    /// spaces therefore produces a malformed URL that fails at send
    /// time, matching the reference behavior.
    fn search_url(&self, keyword: &str) -> String {
        format!("{}/data?keyword={}", self.base_url, keyword)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Proxies a search to the backend and returns the raw body.
    pub async fn search(&self, keyword: &str) -> Result<String> {
        self.get_text(self.search_url(keyword)).await
    }

    /// Fetches the backend's health endpoint body.
    pub async fn health(&self) -> Result<String> {
        self.get_text(self.health_url()).await
    }

    /// Issues a GET and collects the full body as a string.
    ///
    /// The timeout covers the entire request/response cycle, including
    /// body collection. Not suitable for streaming responses.
    async fn get_text(&self, url: String) -> Result<String> {
        let response = timeout(self.timeout, self.client.get(url.as_str()).send())
            .await
            // Outer error: the timeout elapsed before the client resolved
            .map_err(|_| GatewayError::UpstreamTimeout(url.clone()))?
            // Inner error: connection refused, DNS failure, malformed URL
            .map_err(|e| GatewayError::UpstreamRequestFailed(url.clone(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                url,
                status: status.as_u16(),
            });
        }

        timeout(self.timeout, response.text())
            .await
            .map_err(|_| GatewayError::UpstreamTimeout(url.clone()))?
            .map_err(|e| GatewayError::ResponseBodyError(e.to_string()))
    }
}
