//! Presentation policies over the record list: consolidated ordering,
//! search and the per-origin split used for tabs.

use crate::model::record::{Origin, Record};
use std::collections::HashSet;

/// Newest first (id descending), one entry per id.
pub fn consolidated(records: &[Record]) -> Vec<Record> {
    let mut seen = HashSet::new();
    let mut view: Vec<Record> = records
        .iter()
        .filter(|record| seen.insert(record.id))
        .cloned()
        .collect();
    view.sort_by(|a, b| b.id.cmp(&a.id));
    view
}

/// Case-insensitive substring match over `"<first> <last> <document>"`.
pub fn matches(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        record.first_name, record.last_name, record.document_id
    )
    .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

pub fn search<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}

/// Splits into (basic, extended), keeping the input order within each side.
pub fn partition_by_origin(records: &[Record]) -> (Vec<&Record>, Vec<&Record>) {
    records
        .iter()
        .partition(|record| record.origin == Origin::Basic)
}
