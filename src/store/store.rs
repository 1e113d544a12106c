//! RecordStore - Abstract storage for the gamer collection.

use crate::record::{Fields, Record};

use super::StoreError;

/// Abstract storage for an ordered collection of records.
///
/// Lookups match on `id` and act on the first match only.
pub trait RecordStore: Send + Sync {
    /// All records in insertion order. Empty when nothing is stored.
    fn list_all(&self) -> Result<Vec<Record>, StoreError>;

    /// First record with the given id, or `None`.
    fn find_by_id(&self, id: &str) -> Result<Option<Record>, StoreError>;

    /// Append a record to the end of the collection and return it as stored.
    fn insert(&self, record: Record) -> Result<Record, StoreError>;

    /// Merge `fields` into the record with the given id.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    fn update_by_id(&self, id: &str, fields: Fields) -> Result<Option<Record>, StoreError>;

    /// Remove the first record with the given id. Returns true if one was removed.
    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}
