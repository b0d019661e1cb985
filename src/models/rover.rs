use serde::{Deserialize, Serialize};

// ============================================================================
// ROVER - Telemetría del rover de vigilancia
// ============================================================================

/// Snapshot de telemetría. Read-only en este scope; en modo live vendría de
/// GET /api/rover/status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverStatus {
    pub battery_percent: u8,
    pub location: RoverLocation,
    pub heartbeat_iso: String,
    pub mode: String,
    pub last_task: String,
}

/// Posición 2D dentro de un frame de referencia ("lot")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoverLocation {
    pub x: f64,
    pub y: f64,
    pub frame: String,
}
