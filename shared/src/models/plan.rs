//! Timed Ticket Plan Model

use serde::{Deserialize, Serialize};

/// A timed pass plan (unlimited rides for a duration)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimedPlan {
    pub id: String,
    pub name: String,
    /// Validity window in days, counted from first activation
    pub duration_days: i32,
    pub price: f64,
    pub description: Option<String>,
    pub is_active: bool,
}
