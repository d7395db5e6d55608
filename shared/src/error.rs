//! Server error taxonomy
//!
//! Every remote-call failure the client surfaces is one of four kinds.
//! Raw transport errors never cross the repository boundary; they are
//! classified into a [`ServerError`] and carried by the terminal emission
//! of the call's outcome stream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure classification for remote calls
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerErrorKind {
    /// Catch-all failure carrying the underlying message
    General,
    /// No connectivity / transport failure
    Internet,
    /// Authentication missing or session expired
    Token,
    /// Required data absent (null response body, blank required field)
    MissingParam,
}

impl ServerErrorKind {
    /// Default user-facing message for this kind
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::General => "Something went wrong, please try again",
            Self::Internet => "No internet connection",
            Self::Token => "Session expired, please login again",
            Self::MissingParam => "Required data is missing",
        }
    }
}

/// Classified remote-call failure
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct ServerError {
    /// Failure kind
    pub kind: ServerErrorKind,
    /// User-facing message
    pub message: String,
}

impl ServerError {
    /// Create an error with an explicit message
    pub fn new(kind: ServerErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::from_kind(kind)
        } else {
            Self { kind, message }
        }
    }

    /// Create an error carrying the kind's default message
    pub fn from_kind(kind: ServerErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    /// Catch-all error with a message
    pub fn general(message: impl Into<String>) -> Self {
        Self::new(ServerErrorKind::General, message)
    }

    /// Connectivity failure
    pub fn internet() -> Self {
        Self::from_kind(ServerErrorKind::Internet)
    }

    /// Authentication / expired-session failure
    pub fn token() -> Self {
        Self::from_kind(ServerErrorKind::Token)
    }

    /// Required data absent
    pub fn missing_param(message: impl Into<String>) -> Self {
        Self::new(ServerErrorKind::MissingParam, message)
    }
}
