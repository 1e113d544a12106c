//! JsonFileStore - record store persisted to a single JSON document.
//!
//! The backing file holds one JSON object whose `gamers` key maps to the
//! ordered collection. Other top-level keys are carried through untouched.
//! The whole document is rewritten on every mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::record::{Fields, Record};

use super::{RecordStore, StoreError};

/// Top-level key of the collection inside the backing file.
pub const COLLECTION_KEY: &str = "gamers";

/// Loaded contents of the backing file.
#[derive(Debug, Default)]
struct Snapshot {
    records: Vec<Record>,
    extra: Fields,
}

/// On-disk layout, borrowed from a snapshot for writing.
#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "gamers")]
    records: &'a [Record],
    #[serde(flatten)]
    extra: &'a Fields,
}

/// File-backed record store.
///
/// Reads are served from the snapshot loaded by [`initialize`](Self::initialize).
/// A mutation is applied to a copy of the collection, written to disk, and
/// only then swapped in, so a failed write leaves the snapshot unchanged.
///
/// Clone-friendly (cloning shares the same snapshot and path).
#[derive(Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the backing file if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: Arc::new(path.into()),
            snapshot: Arc::new(RwLock::new(Snapshot::default())),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the backing file into memory.
    ///
    /// Creates the file with an empty collection when it is absent, empty, or
    /// lacks the `gamers` key. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let (snapshot, needs_write) = read_snapshot(&self.path)?;

        if needs_write {
            write_document(&self.path, &snapshot.records, &snapshot.extra)?;
            tracing::info!(path = %self.path.display(), "created gamer collection");
        }

        tracing::info!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            "record store loaded"
        );

        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| StoreError::LockPoisoned("store initialize"))?;
        *guard = snapshot;
        Ok(())
    }

    /// Run `apply` against a copy of the collection.
    ///
    /// When `apply` reports a change, the copy is persisted and replaces the
    /// in-memory collection.
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Vec<Record>) -> (T, bool),
    ) -> Result<T, StoreError> {
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|_| StoreError::LockPoisoned("record write"))?;

        let mut records = snapshot.records.clone();
        let (outcome, changed) = apply(&mut records);
        if changed {
            write_document(&self.path, &records, &snapshot.extra)?;
            tracing::debug!(
                path = %self.path.display(),
                records = records.len(),
                "persisted gamer collection"
            );
            snapshot.records = records;
        }
        Ok(outcome)
    }
}

impl RecordStore for JsonFileStore {
    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| StoreError::LockPoisoned("record read"))?;
        Ok(snapshot.records.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Record>, StoreError> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| StoreError::LockPoisoned("record read"))?;
        Ok(snapshot.records.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, record: Record) -> Result<Record, StoreError> {
        self.mutate(|records| {
            records.push(record.clone());
            (record, true)
        })
    }

    fn update_by_id(&self, id: &str, fields: Fields) -> Result<Option<Record>, StoreError> {
        self.mutate(|records| match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.merge(fields);
                (Some(record.clone()), true)
            }
            None => (None, false),
        })
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        self.mutate(|records| match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                (true, true)
            }
            None => (false, false),
        })
    }
}

/// Read the backing file. The flag is set when the file must be (re)written
/// to contain the collection key.
fn read_snapshot(path: &Path) -> Result<(Snapshot, bool), StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok((Snapshot::default(), true)),
        Err(e) => return Err(e.into()),
    };

    if text.trim().is_empty() {
        return Ok((Snapshot::default(), true));
    }

    let mut root: Fields = serde_json::from_str(&text)?;
    match root.remove(COLLECTION_KEY) {
        Some(value) => {
            let records: Vec<Record> = serde_json::from_value(value)?;
            Ok((
                Snapshot {
                    records,
                    extra: root,
                },
                false,
            ))
        }
        None => Ok((
            Snapshot {
                records: Vec::new(),
                extra: root,
            },
            true,
        )),
    }
}

fn write_document(path: &Path, records: &[Record], extra: &Fields) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(&Document { records, extra })?;
    fs::write(path, bytes)?;
    Ok(())
}
