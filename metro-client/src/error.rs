//! Client error types
//!
//! [`ClientError`] is the transport-level error: what actually went wrong
//! while issuing a request. It never crosses the repository boundary; the
//! outcome-stream adapter classifies it into a [`ServerError`] via
//! [`ClientError::classify`].

use shared::{ServerError, ServerErrorKind};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API-level error envelope returned by the server
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Required data absent (null response body, blank required field)
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error code prefix for the authentication range (E1xxx)
const AUTH_CODE_PREFIX: &str = "E1";

impl ClientError {
    /// Classify this error into the server-error taxonomy
    ///
    /// - connectivity/timeout transport failures map to `Internet`
    /// - authentication and expired-session signals map to `Token`
    /// - absent required data maps to `MissingParam`
    /// - everything else maps to `General` carrying this error's message
    pub fn classify(&self) -> ServerError {
        match self {
            Self::Http(err) if err.is_connect() || err.is_timeout() => ServerError::internet(),
            Self::Unauthorized | Self::TokenExpired => ServerError::token(),
            Self::Api { code, message } => {
                if code.starts_with(AUTH_CODE_PREFIX) {
                    ServerError::new(ServerErrorKind::Token, message.clone())
                } else {
                    ServerError::general(message.clone())
                }
            }
            Self::MissingData(message) | Self::InvalidResponse(message) => {
                ServerError::missing_param(message.clone())
            }
            other => ServerError::general(other.to_string()),
        }
    }
}

impl From<ClientError> for ServerError {
    fn from(err: ClientError) -> Self {
        err.classify()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
