//! # Record Listing
//!
//! ## Workflow
//!
//! 1.  **Latency**: waits for the configured read latency.
//!
//! 2.  **Load**: reads and decodes the list stored under the key. A missing
//!     key is an empty list. Ordering is left to the caller (see
//!     `common::listing`).

use super::RecordService;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use common::model::record::Record;
use tokio::time::sleep;

impl<S: KeyValueStorage> RecordService<S> {
    /// Returns every stored record in storage order.
    ///
    /// # Returns
    /// - The records, possibly empty.
    /// - [`crate::error::StoreError::Corrupt`] if the stored payload is not a
    ///   valid record array.
    pub async fn list(&self) -> Result<Vec<Record>> {
        sleep(self.latency.read).await;
        self.load()
    }
}
