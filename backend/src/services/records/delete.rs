//! # Record Deletion
//!
//! ## Workflow
//!
//! 1.  **Latency**: waits for the configured read latency.
//!
//! 2.  **Filter**: drops the record with the given id, if there is one.
//!
//! 3.  **Persist**: writes the list back whether or not anything was
//!     removed, so a delete on an empty store still creates the key.

use super::RecordService;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use log::{debug, info};
use tokio::time::sleep;

impl<S: KeyValueStorage> RecordService<S> {
    /// Removes record `id` if present.
    ///
    /// # Arguments
    /// * `id` - The record to remove. An unknown id is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` whether or not the record existed.
    /// - An error only when storage fails.
    pub async fn delete(&self, id: u64) -> Result<()> {
        sleep(self.latency.read).await;
        let mut records = self.load()?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() < before {
            info!("deleted record {id}");
        } else {
            debug!("delete of unknown record {id} ignored");
        }

        self.save(&records)
    }
}
