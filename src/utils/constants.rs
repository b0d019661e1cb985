/// URL base de la API por defecto
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://127.0.0.1:8000 (por defecto, backend local)
/// - Producción: via UPARKING_API_BASE env var (.env / build.rs)
pub const DEFAULT_API_BASE: &str = match option_env!("UPARKING_API_BASE") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

// Claves de localStorage. Son las del deploy original, no cambiarlas
// o se pierden los datos ya persistidos.
pub const LS_SESSION: &str = "up_session";
pub const LS_SETTINGS: &str = "up_settings";
pub const LS_ALERTS: &str = "up_alerts_demo";
pub const LS_LOT: &str = "up_lot_demo";
pub const LS_RESERVATIONS: &str = "up_res_demo";
