//! Error types for the PDFVector node.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key rejected (401/403 response)
    #[error("Authorization failed ({status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {message}")]
    NotFound {
        /// Error message from API
        message: String,
    },

    /// Invalid request parameters (400/422 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create an authorization error.
    #[must_use]
    pub fn unauthorized(status: u16, message: impl Into<String>) -> Self {
        Self::Unauthorized { status, message: message.into() }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status reported by the API, if the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::BadRequest { .. } => Some(400),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}

/// Errors from building or executing a single operation.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Parameter that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DispatchError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Returns true if the failure happened before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Message placed in the `error` field of a captured item failure.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Unauthorized { message, .. }) => {
                format!("The PDFVector API rejected the API key: {message}")
            }
            Self::Validation { field, message } => {
                format!("Invalid value for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// A batch aborted at the item that failed.
#[derive(thiserror::Error, Debug)]
#[error("Item {item} failed: {source}")]
pub struct BatchError {
    /// Index of the input item that failed.
    pub item: usize,

    /// The underlying failure.
    #[source]
    pub source: DispatchError,
}

impl BatchError {
    /// Tag a dispatch failure with its item index.
    #[must_use]
    pub const fn new(item: usize, source: DispatchError) -> Self {
        Self { item, source }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status() {
        assert_eq!(ClientError::unauthorized(401, "bad key").status(), Some(401));
        assert_eq!(ClientError::not_found("missing").status(), Some(404));
        assert_eq!(ClientError::bad_request("no url").status(), Some(400));
        assert_eq!(ClientError::server(503, "down").status(), Some(503));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ClientError::from(parse).status(), None);
    }

    #[test]
    fn test_validation_user_message() {
        let err = DispatchError::validation("query", "must not be empty");
        assert!(err.is_validation());
        assert!(err.to_user_message().contains("query"));
        assert!(err.to_user_message().contains("must not be empty"));
    }

    #[test]
    fn test_unauthorized_user_message() {
        let err = DispatchError::from(ClientError::unauthorized(401, "Invalid API key"));
        assert!(!err.is_validation());
        assert!(err.to_user_message().contains("Invalid API key"));
    }

    #[test]
    fn test_batch_error_names_item() {
        let err = BatchError::new(3, DispatchError::validation("url", "must not be empty"));
        assert!(err.to_string().starts_with("Item 3 failed"));
        assert_eq!(err.item, 3);
    }
}
