//! Voucher Model

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Voucher status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    /// Reserved for the account but not yet activated
    Preserved,
    /// Redeemable
    Valid,
    Used,
    Expired,
    Revoked,
}

/// Fixed-amount discount voucher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Voucher {
    pub id: String,
    pub code: String,
    pub title: Option<String>,
    /// Fixed deduction when applied
    pub discount_amount: f64,
    /// Minimum cart subtotal required to apply
    pub min_transaction_amount: f64,
    pub status: VoucherStatus,
    /// Expiry (Unix millis), if any
    pub valid_until: Option<i64>,
}

impl Voucher {
    /// Whether this voucher may be applied to a cart with the given subtotal
    ///
    /// Gate: status must be [`VoucherStatus::Valid`] and the subtotal must
    /// reach `min_transaction_amount`. The comparison goes through `Decimal`
    /// so it agrees with the pricing engine.
    pub fn applies_to(&self, subtotal: f64) -> bool {
        if self.status != VoucherStatus::Valid {
            return false;
        }
        let subtotal = Decimal::from_f64(subtotal).unwrap_or_default();
        let minimum = Decimal::from_f64(self.min_transaction_amount).unwrap_or_default();
        subtotal >= minimum
    }
}
