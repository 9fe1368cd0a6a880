//! Entry form state machine.
//!
//! A form cycles `Idle -> Submitting -> Idle`. While `Submitting` every input
//! and the submit control are disabled. Success resets the fields, failure
//! leaves them as typed. The orthogonal editing flag (`editing`) turns the
//! next submission into an update of that record instead of a create, and
//! cancelling an edit resets the form without submitting anything.

use crate::model::record::{Origin, Record, RecordInput};
use crate::rules::{self, Field, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

/// Render metadata for one input. `required` is recomputed on each call to
/// [`Form::fields`], so the email/city markers follow the current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: Option<&'static str>,
    pub required: bool,
}

/// Raw (already sanitized) text held by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub document_id: String,
    pub email: String,
    pub city: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DocumentId => &self.document_id,
            Field::Email => &self.email,
            Field::City => &self.city,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::DocumentId => &mut self.document_id,
            Field::Email => &mut self.email,
            Field::City => &mut self.city,
        }
    }

    /// Builds the record service input. The extended form always sends the
    /// email/city pair, with an empty value as `Some(None)` so an edit can
    /// clear it. The basic form leaves both absent.
    pub fn to_input(&self, kind: Origin) -> RecordInput {
        let optional = |value: &str| Some((!value.is_empty()).then(|| value.to_string()));
        let (email, city) = match kind {
            Origin::Basic => (None, None),
            Origin::Extended => (optional(&self.email), optional(&self.city)),
        };
        RecordInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            document_id: self.document_id.clone(),
            email,
            city,
        }
    }
}

/// Where a submission goes once it has passed the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Create(Origin),
    Update(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub target: Target,
    pub input: RecordInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InProgress,
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct Form {
    kind: Origin,
    values: FormValues,
    phase: FormPhase,
    editing: Option<u64>,
}

impl Form {
    pub fn new(kind: Origin) -> Self {
        Self {
            kind,
            values: FormValues::default(),
            phase: FormPhase::Idle,
            editing: None,
        }
    }

    pub fn kind(&self) -> Origin {
        self.kind
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn inputs_enabled(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// The fields this form renders, in display order.
    pub fn fields(&self) -> Vec<FieldSpec> {
        let mut specs: Vec<FieldSpec> = Field::CORE
            .iter()
            .map(|&field| FieldSpec {
                field,
                label: field.label(),
                input_type: InputType::Text,
                placeholder: (field == Field::DocumentId).then_some("Numbers only"),
                required: true,
            })
            .collect();

        if self.kind == Origin::Extended {
            let required = rules::pair_is_required(&self.values.email, &self.values.city);
            specs.push(FieldSpec {
                field: Field::Email,
                label: Field::Email.label(),
                input_type: InputType::Email,
                placeholder: None,
                required,
            });
            specs.push(FieldSpec {
                field: Field::City,
                label: Field::City.label(),
                input_type: InputType::Text,
                placeholder: None,
                required,
            });
        }
        specs
    }

    /// Sanitizes `raw` for `field` and stores it. Ignored while submitting or
    /// when the field is not part of this form.
    pub fn set_field(&mut self, field: Field, raw: &str) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        if self.kind == Origin::Basic && matches!(field, Field::Email | Field::City) {
            return false;
        }
        *self.values.slot(field) = field.sanitize(raw);
        true
    }

    /// Runs the submit-time gate without changing state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = &self.values;
        rules::check_required(&values.first_name, &values.last_name, &values.document_id)?;
        if self.kind == Origin::Extended {
            rules::check_paired_fields(&values.email, &values.city)?;
        }
        Ok(())
    }

    /// `Idle -> Submitting`. On rejection the form stays `Idle` and untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitError::InProgress);
        }
        self.validate()?;

        self.phase = FormPhase::Submitting;
        let target = match self.editing {
            Some(id) => Target::Update(id),
            None => Target::Create(self.kind),
        };
        Ok(Submission {
            target,
            input: self.values.to_input(self.kind),
        })
    }

    /// `Submitting -> Idle`. Success clears the fields and the editing flag.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.phase = FormPhase::Idle;
        if succeeded {
            self.reset();
        }
    }

    /// Loads `record` for editing. Only the fields this form shows are copied.
    pub fn start_edit(&mut self, record: &Record) {
        self.values = FormValues {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            document_id: record.document_id.clone(),
            ..FormValues::default()
        };
        if self.kind == Origin::Extended {
            self.values.email = record.email.clone().unwrap_or_default();
            self.values.city = record.city.clone().unwrap_or_default();
        }
        self.editing = Some(record.id);
    }

    /// Leaves edit mode with the fields reset. Not allowed mid-submission.
    pub fn cancel_edit(&mut self) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.editing = None;
    }
}
