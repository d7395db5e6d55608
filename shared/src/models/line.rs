//! Metro Line and Station Models

use serde::{Deserialize, Serialize};

/// Metro line entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetroLine {
    pub id: String,
    /// Short code shown on maps (e.g. "M1")
    pub code: String,
    pub name: String,
    /// Display color (hex, e.g. "#E4002B")
    pub color: Option<String>,
    pub is_active: bool,
}

/// Station entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Line this station record belongs to
    pub line_id: String,
    /// Position along the line, 1-based
    pub sequence: i32,
    /// Whether riders can change lines here
    #[serde(default)]
    pub is_interchange: bool,
}
