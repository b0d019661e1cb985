use serde::{Deserialize, Serialize};

/// Reserva de plaza. Los ids son únicos y monotónicos (max + 1 al insertar);
/// la colección se guarda con la más reciente primero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: u32,
    pub user: String,
    pub spot: String,
    /// ISO-8601
    pub start: String,
    /// ISO-8601
    pub end: String,
    pub status: String,
}
