//! Error types for the WaniKani client.

use thiserror::Error;

/// Errors that can occur when using the WaniKani client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed in transit.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Base URL or endpoint path could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server returned 401; the token is missing or revoked.
    #[error("Unauthorized: check the API token")]
    Unauthorized,

    /// Server returned 429 Too Many Requests.
    #[error("Rate limited (429): retry after {retry_after:?}s")]
    RateLimited {
        /// Seconds to wait before retrying, if provided by server.
        retry_after: Option<u64>,
    },

    /// Server returned any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },
}

impl ClientError {
    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) | Self::InvalidResponse(_) => None,
        }
    }
}
