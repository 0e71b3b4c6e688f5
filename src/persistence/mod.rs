//! Durable key-value storage
//!
//! Only two scalars are ever persisted: the Eco Jumper high score and the
//! theme preference. Both are single-writer, last-write-wins.
//!
//! Backends:
//! - `MemoryStorage`: process-local map (tests, headless runs)
//! - `FileStorage`: one JSON object on disk (native)
//! - `LocalStorage`: browser LocalStorage (wasm32)

mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// String key-value store
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
