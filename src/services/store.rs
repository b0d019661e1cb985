// ============================================================================
// PERSISTED STORE - Persistencia tipada de blobs JSON
// ============================================================================
// Wrapper tipado sobre un StorageBackend inyectado. Las lecturas hacen
// safe-parse: valor ausente o corrupto => default del caller, nunca se
// propaga un error de parseo al usuario.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Alert, Reservation, Session, Settings, Spot};
use crate::services::storage::{LocalStorageBackend, StorageBackend};
use crate::utils::constants::{LS_ALERTS, LS_LOT, LS_RESERVATIONS, LS_SESSION, LS_SETTINGS};

/// Store persistido, compartible entre controllers (Rc clone)
#[derive(Clone)]
pub struct PersistedStore {
    backend: Rc<dyn StorageBackend>,
}

impl PersistedStore {
    /// Store sobre localStorage (la app real)
    pub fn local() -> Self {
        Self::with_backend(Rc::new(LocalStorageBackend))
    }

    /// Store sobre un backend inyectado (tests)
    pub fn with_backend(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Leer un valor tipado; ausente o corrupto => `default`
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.get(key) {
            Some(json) => serde_json::from_str(&json).unwrap_or(default),
            None => default,
        }
    }

    /// Leer un valor tipado con su Default
    pub fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read_or(key, T::default())
    }

    /// Serializar y guardar. Un fallo de escritura se loguea y no tumba la UI.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log::error!("❌ [STORE] Error serializando '{}': {}", key, e);
                return;
            }
        };
        if let Err(e) = self.backend.set(key, &json) {
            log::error!("❌ [STORE] Error guardando '{}': {}", key, e);
        }
    }

    /// Eliminar una clave
    pub fn clear(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            log::error!("❌ [STORE] Error eliminando '{}': {}", key, e);
        }
    }

    /// ¿Hay algo guardado bajo la clave?
    pub fn contains(&self, key: &str) -> bool {
        self.backend.get(key).is_some()
    }

    // ------------------------------------------------------------------
    // Helpers de dominio
    // ------------------------------------------------------------------

    pub fn session(&self) -> Option<Session> {
        self.read_or(LS_SESSION, None)
    }

    pub fn set_session(&self, session: &Session) {
        self.write(LS_SESSION, session);
    }

    pub fn clear_session(&self) {
        self.clear(LS_SESSION);
    }

    /// La presencia de sesión (con token) gatea todas las rutas privadas
    pub fn is_authenticated(&self) -> bool {
        self.session().map(|s| !s.token.is_empty()).unwrap_or(false)
    }

    pub fn settings(&self) -> Settings {
        self.read(LS_SETTINGS)
    }

    pub fn set_settings(&self, settings: &Settings) {
        self.write(LS_SETTINGS, settings);
    }

    /// URL base efectiva de la API (guardada o default, sin slash final)
    pub fn api_base(&self) -> String {
        self.settings().effective_api_base()
    }

    pub fn lot(&self) -> Vec<Spot> {
        self.read(LS_LOT)
    }

    pub fn set_lot(&self, spots: &[Spot]) {
        self.write(LS_LOT, &spots);
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.read(LS_RESERVATIONS)
    }

    pub fn set_reservations(&self, rows: &[Reservation]) {
        self.write(LS_RESERVATIONS, &rows);
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.read(LS_ALERTS)
    }

    pub fn set_alerts(&self, alerts: &[Alert]) {
        self.write(LS_ALERTS, &alerts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpotStatus;
    use crate::services::storage::MemoryBackend;

    fn memory_store() -> PersistedStore {
        PersistedStore::with_backend(Rc::new(MemoryBackend::new()))
    }

    #[test]
    fn write_then_read_is_structurally_equal() {
        let store = memory_store();

        let session = Session::demo("student@tamiu.edu", None);
        store.set_session(&session);
        assert_eq!(store.session(), Some(session));

        let spots = vec![Spot {
            id: "A01".to_string(),
            label: "A01".to_string(),
            status: SpotStatus::Free,
        }];
        store.set_lot(&spots);
        assert_eq!(store.lot(), spots);

        let alerts = vec![Alert {
            time: "2026-08-08T12:00:00.000Z".to_string(),
            level: "info".to_string(),
            message: "Lot occupancy updated.".to_string(),
        }];
        store.set_alerts(&alerts);
        assert_eq!(store.alerts(), alerts);
    }

    #[test]
    fn corrupted_value_falls_back_to_default() {
        let backend = Rc::new(MemoryBackend::new());
        backend.set(LS_LOT, "{not json").unwrap();
        backend.set(LS_SESSION, "42").unwrap();

        let store = PersistedStore::with_backend(backend);
        assert!(store.lot().is_empty());
        assert_eq!(store.session(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn absent_value_returns_default_without_error() {
        let store = memory_store();
        assert!(store.reservations().is_empty());
        assert_eq!(store.settings(), Settings::default());
    }

    #[test]
    fn clear_removes_the_key() {
        let store = memory_store();
        store.set_session(&Session::demo("a@b.c", None));
        assert!(store.is_authenticated());
        store.clear_session();
        assert!(!store.is_authenticated());
        assert!(!store.contains(LS_SESSION));
    }

    #[test]
    fn session_json_matches_original_shape() {
        let store = memory_store();
        store.set_session(&Session::demo("student@tamiu.edu", None));
        let backend_json = store
            .read_or::<serde_json::Value>(LS_SESSION, serde_json::Value::Null);
        assert_eq!(backend_json["token"], "demo-token");
        assert_eq!(backend_json["user"]["email"], "student@tamiu.edu");
        assert_eq!(backend_json["user"]["name"], "student");
    }
}
