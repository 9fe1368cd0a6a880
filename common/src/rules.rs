//! Field sanitization and submit-time validation.
//!
//! Sanitizers run on every change event, before a raw value reaches form
//! state:
//! - `documentId` keeps ASCII digits only.
//! - `firstName`, `lastName` and `city` drop ASCII digits.
//! - `email` passes through untouched.
//!
//! The validators run when a form is submitted and decide whether the
//! candidate record may be forwarded to the record service at all.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static pattern"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("static pattern"));

/// Message shown when only one half of the email/city pair is filled in.
pub const PAIRED_FIELDS_MESSAGE: &str =
    "On the extended form, Email and City are mandatory together.";

/// An input field of the entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DocumentId,
    Email,
    City,
}

impl Field {
    /// The three fields every form requires.
    pub const CORE: [Field; 3] = [Field::FirstName, Field::LastName, Field::DocumentId];

    /// Wire name, matching the persisted camelCase keys.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DocumentId => "documentId",
            Field::Email => "email",
            Field::City => "city",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::DocumentId => "Document",
            Field::Email => "Email",
            Field::City => "City",
        }
    }

    /// Applies this field's change-event filter to `raw`.
    pub fn sanitize(&self, raw: &str) -> String {
        match self {
            Field::DocumentId => sanitize_document_id(raw),
            Field::FirstName | Field::LastName | Field::City => sanitize_name(raw),
            Field::Email => raw.to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "documentId" => Ok(Field::DocumentId),
            "email" => Ok(Field::Email),
            "city" => Ok(Field::City),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Removes every character that is not a decimal digit.
pub fn sanitize_document_id(raw: &str) -> String {
    NON_DIGITS.replace_all(raw, "").into_owned()
}

/// Removes every decimal digit.
pub fn sanitize_name(raw: &str) -> String {
    DIGITS.replace_all(raw, "").into_owned()
}

/// A submission rejected before it reaches the record service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", PAIRED_FIELDS_MESSAGE)]
    PairedFieldsRequired,
    #[error("{0} is required.")]
    MissingField(Field),
}

/// True when exactly one of `email` / `city` carries a value.
pub fn pair_is_incomplete(email: &str, city: &str) -> bool {
    email.is_empty() != city.is_empty()
}

/// Live "required" marker for the email/city pair: once either half is
/// filled, both become mandatory.
pub fn pair_is_required(email: &str, city: &str) -> bool {
    !email.is_empty() || !city.is_empty()
}

/// Authoritative submit-time gate for the email/city pair.
pub fn check_paired_fields(email: &str, city: &str) -> Result<(), ValidationError> {
    if pair_is_incomplete(email, city) {
        return Err(ValidationError::PairedFieldsRequired);
    }
    Ok(())
}

/// Rejects the submission if any core field is empty or only whitespace.
pub fn check_required(
    first_name: &str,
    last_name: &str,
    document_id: &str,
) -> Result<(), ValidationError> {
    for (field, value) in Field::CORE.iter().zip([first_name, last_name, document_id]) {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(*field));
        }
    }
    Ok(())
}
