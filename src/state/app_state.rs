// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::services::{ApiClient, PersistedStore};

/// Estado compartido entre controllers. El store es el único estado
/// persistido; los controllers no conservan nada entre navegaciones.
#[derive(Clone)]
pub struct AppState {
    pub store: PersistedStore,
}

impl AppState {
    /// Estado sobre localStorage (la app real)
    pub fn new() -> Self {
        Self {
            store: PersistedStore::local(),
        }
    }

    /// Estado sobre un store inyectado (tests)
    pub fn with_store(store: PersistedStore) -> Self {
        Self { store }
    }

    /// Cliente API contra la base configurada, con el bearer de la sesión
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.store.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
