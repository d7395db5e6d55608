//! Point-to-Point Journey Model

use serde::{Deserialize, Serialize};

/// A buyable point-to-point journey between two stations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Journey {
    pub id: String,
    pub origin_station_id: String,
    pub origin_name: String,
    pub destination_station_id: String,
    pub destination_name: String,
    /// Fare per ticket
    pub fare: f64,
    /// Estimated travel time in minutes
    pub estimated_minutes: i32,
}

/// Journey search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyQuery {
    pub origin_station_id: String,
    pub destination_station_id: String,
}
