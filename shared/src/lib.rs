//! Shared types for the metro ticketing system
//!
//! Common types used by the client crate and any server-side consumer:
//! domain models, API request/response DTOs, the unified response envelope
//! and the server-error taxonomy.

pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ServerError, ServerErrorKind};
pub use response::{API_CODE_SUCCESS, ApiResponse};
