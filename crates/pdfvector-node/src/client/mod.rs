//! PDFVector API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Bearer authentication from the `pdfVectorApi` credential on every call
//! - Pass-through of the API's own error messages
//!
//! Calls are made exactly once; there is no retry, rate limiting or caching.

mod response;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::config::{Config, api};
use crate::credentials::{ApiKey, AuthenticationRule, CredentialDescriptor};
use crate::error::ClientResult;

pub use response::error_message;

/// PDFVector API client.
#[derive(Clone)]
pub struct PdfVectorClient {
    /// HTTP client with the credential baked into its default headers.
    client: Client,

    /// API key (kept for diagnostics only; never logged).
    api_key: ApiKey,

    /// API root, e.g. `https://www.pdfvector.com/v1/api`.
    base_url: String,
}

impl PdfVectorClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let rule: AuthenticationRule = CredentialDescriptor::pdfvector().authenticate;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(rule.header_name(), rule.header_value(&config.api_key)?);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        if !config.api_key.has_expected_prefix() {
            tracing::warn!("API key does not start with 'pdfvector_'; the API may reject it");
        }

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make one authenticated call and return the JSON response.
    ///
    /// A body is sent as JSON when given; `None` sends no body at all. An empty
    /// response body is returned as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, or a non-JSON body.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_string(body)?);
        }

        tracing::debug!(%method, endpoint, has_body = body.is_some(), "Sending PDFVector request");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(%method, endpoint, status = status.as_u16(), "PDFVector response");

        response::into_json(status, &text)
    }
}

impl std::fmt::Debug for PdfVectorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfVectorClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
