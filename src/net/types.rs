//! Transport types — the [`HttpClient`] trait and its response/error model.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::de::DeserializeOwned;

/// Errors produced by HTTP client operations.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The backend answered with a non-success status.
    #[error("{path} returned status {status}")]
    Status {
        /// Request path, relative to the API base.
        path: String,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}

impl HttpError {
    /// Status code of the response, when one was received at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::InvalidBaseUrl(_) | Self::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A successful (2xx) response: status code plus raw body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed bodies.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Credentialed transport used by the session manager.
///
/// Implementations must attach the backend session cookie automatically to
/// every request and surface non-2xx responses as [`HttpError::Status`].
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `path` relative to the API base.
    async fn get(&self, path: &str) -> Result<HttpResponse, HttpError>;

    /// POST a JSON `body` to `path`. `Value::Null` means "no body".
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<HttpResponse, HttpError>;
}
