//! # Record Service
//!
//! The simulated API in front of the record list. It is the only surface
//! that reads or mutates records; callers never see the storage backend.
//!
//! ## Operations
//!
//! - `list`: every record in storage order.
//! - `create`: rejects a duplicate `documentId`, assigns the next id,
//!   attaches the origin and appends.
//! - `update`: rejects a `documentId` owned by another record, fails on an
//!   unknown id, and otherwise merges the input into the record in place.
//! - `delete`: drops the record if present. An unknown id is not an error.
//!
//! ## Behavior shared by all operations
//!
//! 1.  **Latency**: each call first sleeps for the configured read or write
//!     latency, so callers always observe an asynchronous round trip.
//!
//! 2.  **Load**: the whole list is read and decoded from the storage key on
//!     every call. A missing key is an empty list. Nothing is cached here,
//!     so several services over the same storage see each other's writes.
//!
//! 3.  **Persist**: mutations validate against the loaded list first and
//!     only then write the entire list back under the same key. A rejected
//!     call never writes.

mod create;
mod delete;
mod list;
mod update;

use crate::config::{Latency, StoreConfig};
use crate::error::Result;
use crate::storage::KeyValueStorage;
use common::model::record::Record;
use log::debug;

pub struct RecordService<S> {
    storage: S,
    key: String,
    latency: Latency,
}

impl<S: KeyValueStorage> RecordService<S> {
    pub fn new(storage: S, key: impl Into<String>, latency: Latency) -> Self {
        Self {
            storage,
            key: key.into(),
            latency,
        }
    }

    pub fn from_config(storage: S, config: &StoreConfig) -> Self {
        Self::new(storage, config.storage_key.clone(), config.latency)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    fn load(&self) -> Result<Vec<Record>> {
        match self.storage.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.storage.set(&self.key, &raw)?;
        debug!("persisted {} records under {}", records.len(), self.key);
        Ok(())
    }
}
