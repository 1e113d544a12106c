//! InMemoryRecordStore - Vec-backed record store for testing and embedding.

use std::sync::{Arc, RwLock};

use crate::record::{Fields, Record};

use super::{RecordStore, StoreError};

/// In-memory record store with no backing file.
///
/// Clone-friendly (cloning shares the same underlying collection).
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`, in order.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("record read"))?;
        Ok(records.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("record read"))?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, record: Record) -> Result<Record, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("record write"))?;
        records.push(record.clone());
        Ok(record)
    }

    fn update_by_id(&self, id: &str, fields: Fields) -> Result<Option<Record>, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("record write"))?;
        Ok(records.iter_mut().find(|r| r.id() == id).map(|record| {
            record.merge(fields);
            record.clone()
        }))
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("record write"))?;
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
