//! Service layer. `records` is the only service: the simulated API over the
//! persisted record list.

pub mod records;
