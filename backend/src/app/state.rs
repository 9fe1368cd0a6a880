//! State held by the registry controller between messages.

use common::form::Form;
use common::listing;
use common::model::record::{Origin, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A user-facing outcome message. Only the latest one is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

pub struct RegistryState {
    pub basic: Form,
    pub extended: Form,

    /// The form currently shown.
    pub active: Origin,

    /// Local copy of the record list, patched after each successful call.
    pub records: Vec<Record>,

    pub search: String,

    pub notice: Option<Notice>,

    /// Record awaiting delete confirmation.
    pub pending_delete: Option<u64>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryState {
    pub fn new() -> Self {
        Self {
            basic: Form::new(Origin::Basic),
            extended: Form::new(Origin::Extended),
            active: Origin::Basic,
            records: Vec::new(),
            search: String::new(),
            notice: None,
            pending_delete: None,
        }
    }

    pub fn form(&self, kind: Origin) -> &Form {
        match kind {
            Origin::Basic => &self.basic,
            Origin::Extended => &self.extended,
        }
    }

    pub fn form_mut(&mut self, kind: Origin) -> &mut Form {
        match kind {
            Origin::Basic => &mut self.basic,
            Origin::Extended => &mut self.extended,
        }
    }

    /// The form that holds a record in edit mode, if any.
    pub fn editing_form(&self) -> Option<Origin> {
        [Origin::Basic, Origin::Extended]
            .into_iter()
            .find(|&kind| self.form(kind).editing().is_some())
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing_form().and_then(|kind| self.form(kind).editing())
    }

    /// Consolidated, search-filtered view of the cached records.
    pub fn visible(&self) -> Vec<Record> {
        let consolidated = listing::consolidated(&self.records);
        listing::search(&consolidated, &self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn find(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }
}
