//! gamers — the Gamer resource over HTTP.
//!
//! Translates JSON requests into [`RecordStore`](crate::RecordStore) calls.
//! The store is passed in explicitly as router state, so any implementation
//! (the JSON file store, or an in-memory double in tests) can back it.

pub mod docs;
mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::router;
