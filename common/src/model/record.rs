use serde::{Deserialize, Deserializer, Serialize};

/// Which entry form created a record.
///
/// Set once by the record service when the record is created and carried
/// unchanged through every later update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The basic form: names and document only.
    Basic,
    /// The extended form: adds the email/city pair.
    Extended,
}

impl Origin {
    /// Human readable tag used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Basic => "Basic",
            Origin::Extended => "Extended",
        }
    }
}

/// A persisted person record.
///
/// This is also the exact shape of each element of the JSON array stored
/// under the storage key, so field names are camelCase and absent optional
/// fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Assigned by the record service, never by the caller.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Digits only. Unique across the whole store.
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub origin: Origin,
}

/// The caller-editable part of a [`Record`].
///
/// `email` and `city` are tri-state so an update can tell them apart:
/// - `None`: absent, the stored value is kept.
/// - `Some(None)`: present but empty, the stored value is cleared.
/// - `Some(Some(v))`: set to `v`.
///
/// On create, absent and empty mean the same thing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordInput {
    pub first_name: String,
    pub last_name: String,
    pub document_id: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
}

/// Maps a key that is present (even as `null`) to `Some`, leaving a missing
/// key to `#[serde(default)]`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Record {
    pub fn from_input(id: u64, input: RecordInput, origin: Origin) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            document_id: input.document_id,
            email: input.email.flatten(),
            city: input.city.flatten(),
            origin,
        }
    }

    /// Merges `input` into the record. Core fields are always overwritten,
    /// optional fields only when present in `input`. `id` and `origin` are
    /// untouched.
    pub fn apply(&mut self, input: RecordInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.document_id = input.document_id;
        if let Some(email) = input.email {
            self.email = email;
        }
        if let Some(city) = input.city {
            self.city = city;
        }
    }
}
