//! The `pdfVectorApi` credential.
//!
//! The host owns storage of the secret; this module only declares what the
//! credential looks like and how it is attached to outbound requests.

use std::fmt;

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue, InvalidHeaderValue};
use serde::{Deserialize, Serialize};

use crate::schema::ParameterDescriptor;

/// Credential type name referenced by the node description.
pub const CREDENTIAL_NAME: &str = "pdfVectorApi";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PDFVECTOR_API_KEY";

/// Prefix every PDFVector key is issued with.
pub const API_KEY_PREFIX: &str = "pdfvector_";

/// A PDFVector API key.
///
/// `Debug` never prints the secret.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the key is empty or whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True when the key carries the `pdfvector_` prefix.
    ///
    /// Informational only; the remote `validate-key` call decides validity.
    #[must_use]
    pub fn has_expected_prefix(&self) -> bool {
        self.0.starts_with(API_KEY_PREFIX) && self.0.len() > API_KEY_PREFIX.len()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() { f.write_str("ApiKey(<empty>)") } else { f.write_str("ApiKey(***)") }
    }
}

/// The credential record persisted by the host: `{ "apiKey": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// The secret.
    #[serde(default)]
    pub api_key: ApiKey,
}

/// How the credential is injected into requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AuthenticationRule {
    /// `Authorization: Bearer <apiKey>` on every call.
    BearerHeader,
}

impl AuthenticationRule {
    /// Header the rule writes.
    #[must_use]
    pub fn header_name(self) -> HeaderName {
        match self {
            Self::BearerHeader => AUTHORIZATION,
        }
    }

    /// Header value for the given key, marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns error if the key contains bytes not allowed in a header.
    pub fn header_value(self, key: &ApiKey) -> Result<HeaderValue, InvalidHeaderValue> {
        match self {
            Self::BearerHeader => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose()))?;
                value.set_sensitive(true);
                Ok(value)
            }
        }
    }
}

/// Declaration of the credential as the host renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescriptor {
    /// Internal credential type name.
    pub name: &'static str,
    /// Name shown to users.
    pub display_name: &'static str,
    /// Where to read about the API.
    pub documentation_url: &'static str,
    /// Configurable options (just `apiKey`).
    pub properties: Vec<ParameterDescriptor>,
    /// Injection rule.
    pub authenticate: AuthenticationRule,
}

impl CredentialDescriptor {
    /// The `pdfVectorApi` credential.
    #[must_use]
    pub fn pdfvector() -> Self {
        Self {
            name: CREDENTIAL_NAME,
            display_name: "PDFVector API",
            documentation_url: "https://www.pdfvector.com/docs",
            properties: vec![
                ParameterDescriptor::password("apiKey", "API Key").required().describe(
                    "Your PDFVector API key (format: pdfvector_xxxxxxxxxxxxxxxx). \
                     You can get it from https://www.pdfvector.com/api-keys.",
                ),
            ],
            authenticate: AuthenticationRule::BearerHeader,
        }
    }
}
