//! Client-side error type.

use thiserror::Error;

/// Failure of an HTTP request made through [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response whose body could not be decoded. The body is kept for
    /// debugging but left out of the message, it is often a whole HTML page.
    #[error("HTTP {status}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
