use super::state::{Notice, NoticeKind, RegistryState};

pub const RECORD_CREATED: &str = "Record created successfully";
pub const RECORD_UPDATED: &str = "Record updated";
pub const RECORD_DELETED: &str = "Record deleted";
pub const LOAD_FAILED: &str = "Failed to load records";
pub const DELETE_FAILED: &str = "Failed to delete record";

/// Replaces the current notice.
pub fn notify(state: &mut RegistryState, message: impl Into<String>, kind: NoticeKind) {
    state.notice = Some(Notice {
        message: message.into(),
        kind,
    });
}

pub fn editing_notice(first_name: &str) -> String {
    format!("Editing {first_name}...")
}
