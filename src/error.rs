//! Error types for the PayRex client

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type for PayRex operations
pub type Result<T> = std::result::Result<T, PayrexError>;

/// PayRex client errors
#[derive(Error, Debug)]
pub enum PayrexError {
    /// The client could not be constructed (missing API key, bad base URL)
    #[error("Construction error: {0}")]
    Construction(String),

    /// DNS, TCP, TLS or other transport failure; never retried
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response body did not match the expected shape
    #[error("Could not decode response JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// An error response body did not match the error envelope shape
    #[error("Could not decode error response JSON (status {status}): {source}")]
    ErrorBodyDecode {
        /// HTTP status of the response
        status: u16,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed error envelope returned by the API
    #[error("API error: {0}")]
    Api(ApiError),

    /// Webhook signature header missing, malformed, or not matching
    #[error("Webhook signature error: {0}")]
    Signature(#[from] SignatureError),

    /// Webhook event names a resource this client does not know
    #[error("Unrecognized webhook resource: '{0}'")]
    UnrecognizedResource(String),
}

impl PayrexError {
    /// The API error envelope, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status code, when the error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::ErrorBodyDecode { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Error envelope returned by the API for non-2xx statuses
///
/// Wire shape: `{"errors":[{"code":"...","detail":"...","parameter":"..."}]}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// HTTP status of the response
    #[serde(skip)]
    pub status: u16,
    /// Individual error items
    pub errors: Vec<ApiErrorItem>,
}

impl ApiError {
    /// Items that point at a specific request parameter.
    pub fn parameter_errors(&self) -> impl Iterator<Item = &ApiErrorItem> {
        self.errors.iter().filter(|e| !e.parameter.is_empty())
    }

    /// Whether any item carries the given machine code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.status)?;
        for (i, item) in self.errors.iter().enumerate() {
            write!(f, "; [{}] {}", i + 1, item)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// A single structured API error
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorItem {
    /// Machine-readable code
    #[serde(default)]
    pub code: String,
    /// Human-readable detail
    #[serde(default)]
    pub detail: String,
    /// Offending parameter, empty when not parameter-specific
    #[serde(default)]
    pub parameter: String,
}

impl fmt::Display for ApiErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameter.is_empty() {
            write!(f, "{}: {}", self.code, self.detail)
        } else {
            write!(f, "{}: {} (parameter '{}')", self.code, self.detail, self.parameter)
        }
    }
}

/// Webhook signature failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// No signature header on the request
    #[error("Signature missing from request")]
    Missing,

    /// Header is not `t=<ts>,v0=<hex>,v1=<hex>`
    #[error("Malformed signature header: {0}")]
    Malformed(String),

    /// Computed HMAC does not match the header
    #[error("Signature does not match payload")]
    Mismatch,

    /// Timestamp is outside the configured tolerance window
    #[error("Signature timestamp outside tolerance: {age_secs} seconds old (tolerance: {tolerance_secs} seconds)")]
    TimestampOutOfTolerance {
        /// Absolute age of the timestamp
        age_secs: u64,
        /// Configured tolerance
        tolerance_secs: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_decode() {
        let body = r#"{"errors":[
            {"code":"parameter_invalid","detail":"amount must be positive","parameter":"amount"},
            {"code":"resource_missing","detail":"No such customer","parameter":""}
        ]}"#;

        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.errors[0].parameter, "amount");
        assert!(err.has_code("resource_missing"));
        assert_eq!(err.parameter_errors().count(), 1);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            status: 400,
            errors: vec![ApiErrorItem {
                code: "parameter_invalid".into(),
                detail: "bad".into(),
                parameter: "currency".into(),
            }],
        };

        assert_eq!(
            err.to_string(),
            "status 400; [1] parameter_invalid: bad (parameter 'currency')"
        );
    }

    #[test]
    fn test_status_code_accessor() {
        let err = PayrexError::Api(ApiError {
            status: 404,
            errors: vec![],
        });
        assert_eq!(err.status_code(), Some(404));
        assert!(err.api_error().is_some());
        assert!(!err.is_transport());

        let err = PayrexError::Signature(SignatureError::Mismatch);
        assert_eq!(err.status_code(), None);
        assert!(err.api_error().is_none());
    }
}
