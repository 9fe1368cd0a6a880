//! Local durable key/value storage behind the record service.
//!
//! The record service never talks to SQLite directly: it reads and writes one
//! serialized value under one key through [`KeyValueStorage`]. Two backends
//! are provided:
//! - `SqliteStorage`: a `kv` table in a SQLite file (or an in-memory
//!   database), the default for the binary.
//! - `MemoryStorage`: a locked `HashMap`, used by tests and throwaway sessions.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string-to-string store with whole-value overwrite semantics.
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when nothing has been written under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces whatever is stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
