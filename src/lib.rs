//! gamers_api — a simple gamers ranking service.
//!
//! Gamer records (a generated `id` plus arbitrary JSON fields) are kept in a
//! [`RecordStore`] and served as JSON over HTTP under `/gamers`.
//!
//! - [`record`]: the record type and merge-update semantics.
//! - [`store`]: the store trait, the JSON-file store and an in-memory store.
//! - [`gamers`]: axum handlers for the resource (requires `http`).
//! - [`server`]: configuration, logging and the listener (requires `http`).

pub mod id;
pub mod record;
pub mod store;

#[cfg(feature = "http")]
pub mod gamers;
#[cfg(feature = "http")]
pub mod server;

pub use id::generate_id;
pub use record::{Fields, Record};
pub use store::{InMemoryRecordStore, JsonFileStore, RecordStore, StoreError};
