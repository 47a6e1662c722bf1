//! Persistence Layer - Core Traits

use thiserror::Error;

/// Failure reported by a storage backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// String key-value storage, scoped to one device
///
/// Mirrors the browser `localStorage` contract. All calls are synchronous.
pub trait PersistenceStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PersistenceStore + ?Sized> PersistenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
