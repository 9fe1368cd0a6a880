//! Local record service and registry controller.
//!
//! There is no server: the "API" is [`services::records::RecordService`], an
//! asynchronous façade with simulated latency over a key/value store
//! ([`storage`]). The [`app`] module drives the entry forms from `common`
//! against that façade.

pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod storage;
