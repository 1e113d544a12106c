//! Gamer records - an `id` plus an open set of caller-supplied fields.
//!
//! ## Example
//!
//! ```ignore
//! use gamers_api::Record;
//! use serde_json::json;
//!
//! let fields = json!({ "title": "Score = 100", "author": "A" });
//! let mut record = Record::new("V1StGXR8", fields.as_object().cloned().unwrap());
//! record.merge(json!({ "title": "Score = 200" }).as_object().cloned().unwrap());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field. Never taken from client input.
pub const ID_FIELD: &str = "id";

/// Loosely typed record fields, kept in insertion order.
pub type Fields = Map<String, Value>;

/// A single gamer entry.
///
/// Serializes as a flat JSON object with `id` first, followed by the
/// remaining fields in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    #[serde(flatten)]
    fields: Fields,
}

impl Record {
    /// Build a record from an id and caller fields.
    ///
    /// Any `id` key inside `fields` is dropped; the explicit id wins.
    pub fn new(id: impl Into<String>, mut fields: Fields) -> Self {
        fields.remove(ID_FIELD);
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Look up a single non-id field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Overlay `partial` onto this record.
    ///
    /// New keys are appended, existing keys are overwritten in place and the
    /// `id` is left untouched.
    pub fn merge(&mut self, partial: Fields) {
        for (key, value) in partial {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}
