use serde::{Deserialize, Serialize};

/// Alerta del sistema. Append-only en este scope: se leen, filtran y ordenan
/// para mostrar, nunca se mutan. El level es texto libre (el seed usa
/// "info" y "warn").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// ISO-8601
    pub time: String,
    pub level: String,
    pub message: String,
}
