//! Status fetch error types.

use crate::errors::DcloneError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Status API rate limited the request (HTTP 429)")]
    RateLimited,

    #[error("Status API returned HTTP {status}")]
    Http { status: u16 },

    #[error("Status API request timed out")]
    Timeout,

    #[error("Network error contacting status API: {message}")]
    Network { message: String },

    #[error("Could not decode status API response: {message}")]
    Decode { message: String },
}

impl FetchError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::RateLimited)
    }

    /// Whether this failure should surface as a user-visible alert.
    pub fn should_alert(&self) -> bool {
        !self.is_rate_limited()
    }
}

impl DcloneError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::RateLimited => "FETCH_RATE_LIMITED",
            FetchError::Http { .. } => "FETCH_HTTP_ERROR",
            FetchError::Timeout => "FETCH_TIMEOUT",
            FetchError::Network { .. } => "FETCH_NETWORK_ERROR",
            FetchError::Decode { .. } => "FETCH_DECODE_ERROR",
        }
    }
}
