//! Error types for the Veritas SDK.

use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// Connection error (network, DNS, refused, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-success status
    #[error("Service error (HTTP {status}): {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, or the raw body
        message: String,
    },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request could not be built or sent
    #[error("Request error: {0}")]
    Request(String),
}

impl SdkError {
    /// Whether the service rejected the input itself (HTTP 4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, SdkError::Service { status, .. } if (400..500).contains(status))
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            SdkError::Connection(e.to_string())
        } else if e.is_decode() {
            SdkError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            SdkError::Service {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            SdkError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Decode(format!("JSON parsing error: {}", e))
    }
}
