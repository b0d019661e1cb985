use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SPOT - Plaza de parking
// ============================================================================

/// Estado de una plaza. El click sobre una plaza cicla:
/// free → occupied → reserved → free
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Free,
    Occupied,
    Reserved,
}

impl SpotStatus {
    pub fn cycled(self) -> Self {
        match self {
            SpotStatus::Free => SpotStatus::Occupied,
            SpotStatus::Occupied => SpotStatus::Reserved,
            SpotStatus::Reserved => SpotStatus::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpotStatus::Free => "free",
            SpotStatus::Occupied => "occupied",
            SpotStatus::Reserved => "reserved",
        }
    }

    /// Parsear el value de un select de filtro ("free"/"occupied"/"reserved")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(SpotStatus::Free),
            "occupied" => Some(SpotStatus::Occupied),
            "reserved" => Some(SpotStatus::Reserved),
            _ => None,
        }
    }
}

impl fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Una plaza del lot. El id es único dentro de las 50 plazas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spot {
    pub id: String,
    pub label: String,
    pub status: SpotStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycle_is_exactly_free_occupied_reserved() {
        assert_eq!(SpotStatus::Free.cycled(), SpotStatus::Occupied);
        assert_eq!(SpotStatus::Occupied.cycled(), SpotStatus::Reserved);
        assert_eq!(SpotStatus::Reserved.cycled(), SpotStatus::Free);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&SpotStatus::Occupied).unwrap();
        assert_eq!(json, "\"occupied\"");
        let back: SpotStatus = serde_json::from_str("\"reserved\"").unwrap();
        assert_eq!(back, SpotStatus::Reserved);
    }
}
