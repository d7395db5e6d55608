//! Order Models
//!
//! Orders are server-authoritative records of a completed checkout. The
//! client only reads them; the totals here are the server's, not the cart's
//! client-side estimate.

use serde::{Deserialize, Serialize};

use super::cart_item::{CartItem, TicketKind};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
    Refunded,
}

/// One purchased line within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub kind: TicketKind,
    pub reference_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Order summary (history list entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub status: OrderStatus,
    pub subtotal: f64,
    #[serde(default)]
    pub membership_deduction: f64,
    #[serde(default)]
    pub voucher_deduction: f64,
    pub total: f64,
    pub created_at: i64,
}

/// Full order detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub payments: Vec<PaymentRecord>,
    /// Voucher code applied at checkout, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
}

/// Payment record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    /// Payment method name (e.g. "CARD", "WALLET")
    pub method: String,
    pub amount: f64,
    pub paid_at: i64,
}

/// Checkout payload
///
/// The server recomputes all totals from the line items; the client's
/// estimate is never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
    /// Payment method name chosen in the app
    pub payment_method: String,
}
