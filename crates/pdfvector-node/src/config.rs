//! Configuration for the PDFVector node.

use std::time::Duration;

use crate::credentials::{API_KEY_ENV, ApiKey, CredentialRecord};

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the PDFVector API.
    pub const BASE_URL: &str = "https://www.pdfvector.com/v1/api";

    /// Environment variable overriding the base URL.
    pub const BASE_URL_ENV: &str = "PDFVECTOR_BASE_URL";

    /// Request timeout (document parsing with LLM can take a while).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Node configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// PDFVector API key.
    pub api_key: ApiKey,

    /// Base URL for the API (overridable for mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration for the production API.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: ApiKey::new("pdfvector_test_key"),
            base_url: format!("{}/v1/api", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create a configuration from the credential record the host stores.
    #[must_use]
    pub fn from_record(record: CredentialRecord) -> Self {
        Self::new(record.api_key)
    }

    /// Create a configuration from a credential record serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a `{ "apiKey": ... }` record.
    pub fn from_record_json(text: &str) -> anyhow::Result<Self> {
        let record: CredentialRecord = serde_json::from_str(text)
            .map_err(|e| anyhow::anyhow!("invalid credential record: {e}"))?;
        Ok(Self::from_record(record))
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing or empty.
    pub fn from_env() -> anyhow::Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| anyhow::anyhow!("{API_KEY_ENV} is not set"))?;
        let config = Self::new(ApiKey::new(key));

        Ok(match std::env::var(api::BASE_URL_ENV) {
            Ok(base_url) => config.with_base_url(base_url),
            Err(_) => config,
        })
    }

    /// Check the configuration before building a client.
    ///
    /// # Errors
    ///
    /// Returns error on an empty API key or a base URL that is not http(s).
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("API key must not be empty");
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid base URL '{}': {e}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base URL must use http or https, got '{}'", url.scheme());
        }

        Ok(())
    }

    /// Full URL of an API endpoint.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}
