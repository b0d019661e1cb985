// ============================================================================
// STATE MODULE - Estado compartido de la app
// ============================================================================

pub mod app_state;

pub use app_state::AppState;
