//! Error types for the HTTP collaborator.

use thiserror::Error;

/// Errors raised while talking to the admin API.
///
/// A response with a non-200 status is *not* an error at this layer; it is returned as
/// an [`ApiResponse`](super::ApiResponse) and judged by the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The HTTP client could not be built or the URL was unusable.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its body could not be read or decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() || e.is_body() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::Client(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
