//! Browser LocalStorage backend (wasm32 only)

use super::Storage;
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// The window's LocalStorage, if the browser exposes one
    pub fn open() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|inner| Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable)
    }
}
