//! HTTP client abstraction for testability

use std::time::Duration;

use super::error::ProviderError;

/// Default timeout for provider requests, matched to the query's own
/// server-side timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// A raw HTTP response, undecoded.
///
/// The provider inspects status and content type itself to classify
/// failures, so the client reports them rather than folding non-2xx
/// responses into a transport error.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP POST operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
#[allow(async_fn_in_trait)]
pub trait HttpPost: Send + Sync {
    /// Performs an HTTP POST request with a plain-text body.
    async fn post(&self, url: &str, body: String) -> Result<HttpResponse, ProviderError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpPost for ReqwestClient {
    async fn post(&self, url: &str, body: String) -> Result<HttpResponse, ProviderError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| ProviderError::Http(format!("request failed: {}", e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Http(format!("failed to read response: {}", e)))?
            .to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
