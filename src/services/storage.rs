// ============================================================================
// STORAGE BACKEND - Acceso clave/valor a almacenamiento durable
// ============================================================================
// El backend es una interfaz inyectable: en el navegador es localStorage
// (scoped al origin, durable entre restarts); en tests es un HashMap.
// Acceso single-thread y síncrono, no hace falta locking.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Interfaz mínima get/set/remove sobre strings
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Backend real: window.localStorage
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .storage()
            .ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = self
            .storage()
            .ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Backend en memoria para tests (y como fake genérico)
#[derive(Default)]
pub struct MemoryBackend {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.map.borrow_mut().remove(key);
        Ok(())
    }
}
