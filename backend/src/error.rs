//! Errors returned by the record service.
//!
//! `DuplicateDocument` and `NotFound` are user-correctable: the caller shows
//! the message and lets the user fix the input. `Storage` and `Corrupt` come
//! from the persistence layer. No variant leaves the stored list partially
//! modified.

use crate::storage::StorageError;
use thiserror::Error;

/// The mutation that ran into a taken document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}", duplicate_message(.document, .operation))]
    DuplicateDocument {
        document: String,
        operation: Operation,
    },

    #[error("record {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored records are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

fn duplicate_message(document: &str, operation: &Operation) -> String {
    match operation {
        Operation::Create => format!("a record already exists with document {document}"),
        Operation::Update => format!("another record already has document {document}"),
    }
}
