//! Error types for the paper browser.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the HTTP gateway layer.
///
/// Malformed or missing *fields* inside a record are never errors; the
/// normalizer resolves those with defaults. This type only covers the cases
/// where the whole fetch fails: transport problems, non-2xx statuses, and
/// bodies that are not a record list at all.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the papers endpoint
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed as JSON but is not a record list
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}

impl ClientError {
    /// Create a status error from a non-2xx response.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create an unexpected-body error.
    #[must_use]
    pub fn unexpected_body(message: impl Into<String>) -> Self {
        Self::UnexpectedBody(message.into())
    }

    /// Convert to the single string message shown in the error state.
    ///
    /// A failed load is terminal for the session; this message is all the
    /// user sees until they rerun the browser.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_connect() => {
                "Failed to fetch research papers: could not reach the server".to_string()
            }
            Self::Status { status, .. } => format!("HTTP error! status: {status}"),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for gateway operations.
pub type ClientResult<T> = Result<T, ClientError>;
