//! Fetch error types.

use std::fmt;

/// Errors raised while fetching a stats document.
///
/// The `Display` output ends up verbatim in the plugin's WARNING text,
/// so messages are kept short and single-line.
#[derive(Debug)]
pub enum FetchError {
    /// URL could not be turned into a request.
    InvalidUrl(String),

    /// TCP connection could not be established.
    Connect(std::io::Error),

    /// Whole exchange did not finish in time.
    Timeout { duration_ms: u64 },

    /// HTTP protocol error (handshake, send, body read).
    Http(hyper::Error),

    /// Request could not be built.
    Request(http::Error),

    /// Upstream answered with a non-success status.
    Status(http::StatusCode),

    /// Body was not valid JSON or lacked expected fields.
    Json(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "invalid url: {}", url),
            FetchError::Connect(e) => write!(f, "connection failed: {}", e),
            FetchError::Timeout { duration_ms } => {
                write!(f, "request timeout after {}ms", duration_ms)
            }
            FetchError::Http(e) => write!(f, "HTTP error: {}", e),
            FetchError::Request(e) => write!(f, "invalid request: {}", e),
            FetchError::Status(status) => write!(f, "{}", status),
            FetchError::Json(e) => write!(f, "invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Connect(e) => Some(e),
            FetchError::Http(e) => Some(e),
            FetchError::Request(e) => Some(e),
            FetchError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hyper::Error> for FetchError {
    fn from(e: hyper::Error) -> Self {
        FetchError::Http(e)
    }
}

impl From<http::Error> for FetchError {
    fn from(e: http::Error) -> Self {
        FetchError::Request(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Json(e)
    }
}
