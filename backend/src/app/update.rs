//! Update function for the registry controller.
//!
//! Elm-style: takes the current state, the record service and one `Msg`,
//! performs any service call, patches the state and returns whether anything
//! visible changed.
//!
//! Key behaviors
//! - `Load` hydrates the cached list once at startup.
//! - `Submit` runs the form gate, then creates or updates depending on the
//!   form's editing flag. Success resets both forms, failure keeps the input.
//! - `Edit` loads a record into the form that owns its origin.
//! - Deletes are two-step (`RequestDelete` then `ConfirmDelete`).
//! - `update` borrows the state mutably for the whole service call, so no
//!   other message can run until the call returns. The form's `Submitting`
//!   phase is what a concurrent renderer observes in the meantime.

use common::form::{SubmitError, Target};
use common::model::record::{Origin, Record};
use log::{debug, error};

use crate::error::StoreError;
use crate::services::records::RecordService;
use crate::storage::KeyValueStorage;

use super::helpers::{self, notify};
use super::messages::Msg;
use super::state::{NoticeKind, RegistryState};

pub async fn update<S: KeyValueStorage>(
    state: &mut RegistryState,
    service: &RecordService<S>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            match service.list().await {
                Ok(records) => state.records = records,
                Err(e) => {
                    error!("loading records failed: {e}");
                    notify(state, helpers::LOAD_FAILED, NoticeKind::Error);
                }
            }
            true
        }
        Msg::Input { form, field, value } => state.form_mut(form).set_field(field, &value),
        Msg::Submit(kind) => submit(state, service, kind).await,
        Msg::Edit(id) => {
            let Some(record) = state.find(id).cloned() else {
                notify(state, StoreError::NotFound(id).to_string(), NoticeKind::Error);
                return true;
            };
            state.basic.reset();
            state.extended.reset();
            state.form_mut(record.origin).start_edit(&record);
            state.active = record.origin;
            notify(state, helpers::editing_notice(&record.first_name), NoticeKind::Info);
            true
        }
        Msg::CancelEdit => {
            let kind = state.editing_form().unwrap_or(state.active);
            if !state.form_mut(kind).cancel_edit() {
                return false;
            }
            state.active = kind;
            true
        }
        Msg::RequestDelete(id) => {
            state.pending_delete = Some(id);
            true
        }
        Msg::DismissDelete => state.pending_delete.take().is_some(),
        Msg::ConfirmDelete => {
            let Some(id) = state.pending_delete.take() else {
                return false;
            };
            match service.delete(id).await {
                Ok(()) => {
                    state.records.retain(|record| record.id != id);
                    notify(state, helpers::RECORD_DELETED, NoticeKind::Success);
                }
                Err(e) => {
                    error!("deleting record {id} failed: {e}");
                    notify(state, helpers::DELETE_FAILED, NoticeKind::Error);
                }
            }
            true
        }
        Msg::Search(query) => {
            state.search = query;
            true
        }
        Msg::SelectForm(kind) => {
            let changed = state.active != kind;
            state.active = kind;
            changed
        }
        Msg::DismissNotice => state.notice.take().is_some(),
    }
}

async fn submit<S: KeyValueStorage>(
    state: &mut RegistryState,
    service: &RecordService<S>,
    kind: Origin,
) -> bool {
    let submission = match state.form_mut(kind).begin_submit() {
        Ok(submission) => submission,
        Err(SubmitError::InProgress) => return false,
        Err(SubmitError::Rejected(e)) => {
            debug!("{} form rejected: {e}", kind.label());
            notify(state, e.to_string(), NoticeKind::Error);
            return true;
        }
    };

    let outcome: Result<(Record, &str), StoreError> = match submission.target {
        Target::Create(origin) => service
            .create(submission.input, origin)
            .await
            .map(|record| (record, helpers::RECORD_CREATED)),
        Target::Update(id) => service
            .update(id, submission.input)
            .await
            .map(|record| (record, helpers::RECORD_UPDATED)),
    };

    match outcome {
        Ok((record, message)) => {
            match state.records.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record.clone(),
                None => state.records.push(record.clone()),
            }
            state.form_mut(kind).finish_submit(true);
            state.basic.reset();
            state.extended.reset();
            if matches!(submission.target, Target::Update(_)) {
                state.active = record.origin;
            }
            notify(state, message, NoticeKind::Success);
        }
        Err(e) => {
            state.form_mut(kind).finish_submit(false);
            notify(state, e.to_string(), NoticeKind::Error);
        }
    }
    true
}
