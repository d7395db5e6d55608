//! Cart Line Item Model

use serde::{Deserialize, Serialize};

/// Ticket kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketKind {
    /// Single ride between two stations
    PointToPoint,
    /// Timed pass (unlimited rides for a duration)
    Timed,
}

/// One buyable unit in the cart
///
/// `reference_id` points at the journey or timed plan this line was created
/// from. Two lines with the same kind and reference merge on add; the
/// `instance_id` identifies a line across quantity updates and removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Client-generated line ID
    pub instance_id: String,
    pub kind: TicketKind,
    /// Journey or timed plan ID
    pub reference_id: String,
    /// Display name snapshot (journey or plan name at add time)
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

impl CartItem {
    /// Create a new cart line with a fresh instance ID
    pub fn new(
        kind: TicketKind,
        reference_id: impl Into<String>,
        name: impl Into<String>,
        quantity: i32,
        unit_price: f64,
    ) -> Self {
        Self {
            instance_id: uuid::Uuid::new_v4().to_string(),
            kind,
            reference_id: reference_id.into(),
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Whether another line represents the same buyable unit
    pub fn merges_with(&self, other: &Self) -> bool {
        self.kind == other.kind && self.reference_id == other.reference_id
    }
}
