//! # Record Update
//!
//! Merges new field values into an existing record. This is what an edit
//! submitted from either form turns into.
//!
//! ## Workflow
//!
//! 1.  **Latency**: waits for the configured write latency.
//!
//! 2.  **Uniqueness**: rejects the input if a record with a *different* id
//!     already has `input.documentId`. Keeping the record's own document is
//!     allowed. This check runs before the lookup below, so a collision wins
//!     over an unknown id.
//!
//! 3.  **Lookup**: fails with `NotFound` if no record has the id.
//!
//! 4.  **Merge**: the core fields are overwritten. `email` and `city` change
//!     only when the input carries them, and are cleared when it carries
//!     them empty. `id` and `origin` never change.
//!
//! 5.  **Persist**: the whole list is written back.

use super::RecordService;
use crate::error::{Operation, Result, StoreError};
use crate::storage::KeyValueStorage;
use common::model::record::{Record, RecordInput};
use log::{info, warn};
use tokio::time::sleep;

impl<S: KeyValueStorage> RecordService<S> {
    /// Merges `input` into record `id`.
    ///
    /// # Arguments
    /// * `id` - The record to change.
    /// * `input` - New field values. See [`RecordInput`] for how absent and
    ///   empty optional fields differ.
    ///
    /// # Returns
    /// - The record as stored after the merge.
    /// - [`StoreError::DuplicateDocument`] if another record owns the
    ///   document, even when `id` does not exist.
    /// - [`StoreError::NotFound`] if `id` does not exist.
    pub async fn update(&self, id: u64, input: RecordInput) -> Result<Record> {
        sleep(self.latency.write).await;
        let mut records = self.load()?;

        if records
            .iter()
            .any(|r| r.document_id == input.document_id && r.id != id)
        {
            warn!("update of {id} rejected: document {} belongs to another record", input.document_id);
            return Err(StoreError::DuplicateDocument {
                document: input.document_id,
                operation: Operation::Update,
            });
        }

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            warn!("update rejected: record {id} not found");
            return Err(StoreError::NotFound(id));
        };
        record.apply(input);
        let updated = record.clone();

        self.save(&records)?;
        info!("updated record {id}");
        Ok(updated)
    }
}
