//! Ticket and Validation Models

use serde::{Deserialize, Serialize};

use super::cart_item::TicketKind;

/// Ticket status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Purchased, not yet used/activated
    Unused,
    /// Timed pass inside its validity window
    Active,
    Used,
    Expired,
    Refunded,
}

/// An issued ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub order_id: String,
    pub kind: TicketKind,
    /// Journey or plan name snapshot
    pub name: String,
    pub status: TicketStatus,
    /// Opaque server-issued payload rendered as the QR code.
    /// The client never generates or verifies this.
    pub qr_payload: String,
    pub valid_from: Option<i64>,
    pub valid_until: Option<i64>,
}

impl Ticket {
    /// Whether the ticket can currently be presented at a gate
    pub fn is_presentable(&self) -> bool {
        matches!(self.status, TicketStatus::Unused | TicketStatus::Active)
    }
}

/// Staff-side validation lookup result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationRecord {
    pub ticket_id: String,
    pub kind: TicketKind,
    pub status: TicketStatus,
    /// Whether the gate should accept the ticket
    pub usable: bool,
    /// Reason shown to staff when not usable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub checked_at: i64,
}
