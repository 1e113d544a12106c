//! Record Store - durable storage for the gamer collection.
//!
//! The collection is an ordered sequence of [`Record`]s. Every mutating
//! operation persists the whole collection before it returns, so the backing
//! file always reflects the last completed mutation.
//!
//! ## Example
//!
//! ```ignore
//! use gamers_api::{JsonFileStore, Record, RecordStore};
//!
//! let store = JsonFileStore::open("db.json")?;
//! let stored = store.insert(Record::new("V1StGXR8", fields))?;
//! let loaded = store.find_by_id(stored.id())?;
//! ```
//!
//! [`Record`]: crate::Record

mod file;
mod in_memory;
mod store;

use std::fmt;

/// Error type for record store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// The backing file could not be parsed or the collection could not be encoded.
    Serde(String),
    /// A lock guarding the in-memory snapshot was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store io error: {}", e),
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

pub use file::{JsonFileStore, COLLECTION_KEY};
pub use in_memory::InMemoryRecordStore;
pub use store::RecordStore;
