//! Shared model and pure rules for the record registry.
//!
//! Nothing in this crate performs I/O: the `backend` crate owns storage and
//! latency, and drives the forms defined here.

pub mod form;
pub mod listing;
pub mod model;
pub mod rules;
