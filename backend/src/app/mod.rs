//! Registry controller: the glue between the entry forms and the record
//! service that a rendering layer drives.
//!
//! Responsibilities
//! - Own the `RecordService` and the `RegistryState` (forms, cached list,
//!   search query, notices).
//! - Route every `Msg` through `update::update`.
//! - Expose read access to the state so a view can render it.

mod helpers;
mod messages;
mod state;
mod update;

pub use helpers::{DELETE_FAILED, LOAD_FAILED, RECORD_CREATED, RECORD_DELETED, RECORD_UPDATED};
pub use messages::Msg;
pub use state::{Notice, NoticeKind, RegistryState};

use crate::services::records::RecordService;
use crate::storage::KeyValueStorage;

pub struct Registry<S> {
    state: RegistryState,
    service: RecordService<S>,
}

impl<S: KeyValueStorage> Registry<S> {
    pub fn new(service: RecordService<S>) -> Self {
        Self {
            state: RegistryState::new(),
            service,
        }
    }

    /// Processes one message. Returns `true` when the view should re-render.
    pub async fn send(&mut self, msg: Msg) -> bool {
        update::update(&mut self.state, &self.service, msg).await
    }

    /// Processes messages in order; `true` if any of them changed the view.
    pub async fn send_batch(&mut self, msgs: Vec<Msg>) -> bool {
        let mut changed = false;
        for msg in msgs {
            changed |= self.send(msg).await;
        }
        changed
    }

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn service(&self) -> &RecordService<S> {
        &self.service
    }
}
