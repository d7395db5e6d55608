//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::account::Account;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token expiry (Unix seconds), if the server issues expiring tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    pub account: Account,
}

/// Current account response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAccountResponse {
    pub account: Account,
}

// =============================================================================
// Voucher / Discount API DTOs
// =============================================================================

/// Redeem voucher request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemVoucherRequest {
    pub code: String,
}

/// Active discount package response
///
/// `package` is `None` when the account holds no active package; that is a
/// successful response, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveDiscountResponse {
    pub package: Option<crate::models::discount::DiscountPackage>,
}
