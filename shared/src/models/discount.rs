//! Discount Package Model

use serde::{Deserialize, Serialize};

/// Membership discount package
///
/// Grants a percentage off the cart subtotal while active. The server
/// returns at most one active package per account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountPackage {
    pub id: String,
    pub name: String,
    /// Discount fraction in [0, 1] (0.1 = 10% off)
    pub percentage: f64,
    pub valid_from: Option<i64>,
    pub valid_until: Option<i64>,
    pub is_active: bool,
}
