//! # Record Creation
//!
//! Adds one record to the stored list. Both entry forms end up here; the
//! only difference between them is the `origin` they pass.
//!
//! ## Workflow
//!
//! 1.  **Latency**: waits for the configured write latency before touching
//!     storage.
//!
//! 2.  **Uniqueness**: loads the list and rejects the input if any record,
//!     whatever its origin, already carries the same `documentId`.
//!
//! 3.  **Id assignment**: the new id is the highest stored id plus one, or 1
//!     for an empty list. The caller never chooses it.
//!
//! 4.  **Persist**: the record is appended with its `origin` and the whole
//!     list is written back under the storage key.
//!
//! A rejected create leaves the stored list untouched.

use super::RecordService;
use crate::error::{Operation, Result, StoreError};
use crate::storage::KeyValueStorage;
use common::model::record::{Origin, Record, RecordInput};
use log::{info, warn};
use tokio::time::sleep;

impl<S: KeyValueStorage> RecordService<S> {
    /// Appends a new record built from `input`.
    ///
    /// # Arguments
    /// * `input` - Caller-editable fields. An absent or empty email/city is
    ///   stored as absent.
    /// * `origin` - The form the record came from. Kept for the record's
    ///   whole lifetime.
    ///
    /// # Returns
    /// - The stored record, with its assigned id.
    /// - [`StoreError::DuplicateDocument`] if the document is already taken.
    /// - [`StoreError::Storage`] / [`StoreError::Corrupt`] if the list cannot
    ///   be read or written.
    pub async fn create(&self, input: RecordInput, origin: Origin) -> Result<Record> {
        sleep(self.latency.write).await;
        let mut records = self.load()?;

        if records.iter().any(|r| r.document_id == input.document_id) {
            warn!("create rejected: document {} already registered", input.document_id);
            return Err(StoreError::DuplicateDocument {
                document: input.document_id,
                operation: Operation::Create,
            });
        }

        let record = Record::from_input(next_id(&records), input, origin);
        records.push(record.clone());
        self.save(&records)?;

        info!("created record {} ({})", record.id, origin.label());
        Ok(record)
    }
}

/// Highest stored id plus one, or 1 for an empty list.
fn next_id(records: &[Record]) -> u64 {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}
