//! Account Model

use serde::{Deserialize, Serialize};

/// Rider account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Whether the account holds an active discount package
    #[serde(default)]
    pub is_member: bool,
    pub created_at: i64,
}

/// Update account payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
