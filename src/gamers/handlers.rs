//! HTTP handlers for the gamer resource.
//!
//! ## Routes (relative to the mount point)
//!
//! - `GET /`: list every gamer, in insertion order.
//! - `POST /`: create a gamer from a JSON object; the id is generated.
//! - `GET /:id`: fetch one gamer, `404` with an empty body if absent.
//! - `PUT /:id`: merge a JSON object into a gamer. Answers `null` if absent.
//! - `DELETE /:id`: remove a gamer. Always `200`.
//!
//! Store calls are synchronous and run on the request task; with the JSON
//! file store each mutation blocks on a whole-file write.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gamers_api::{gamers, InMemoryRecordStore};
//!
//! let app = axum::Router::new()
//!     .nest("/gamers", gamers::router(Arc::new(InMemoryRecordStore::new())));
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::id::generate_id;
use crate::record::{Fields, Record};
use crate::store::RecordStore;

use super::error::ApiError;

/// Build an axum `Router` serving the gamer resource from `store`.
pub fn router<S: RecordStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/", get(list_gamers::<S>).post(create_gamer::<S>))
        .route(
            "/:id",
            get(get_gamer::<S>)
                .put(update_gamer::<S>)
                .delete(delete_gamer::<S>),
        )
        .with_state(store)
}

/// `GET /`: the full collection.
async fn list_gamers<S: RecordStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(store.list_all()?))
}

/// `GET /:id`: one gamer.
async fn get_gamer<S: RecordStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    store
        .find_by_id(&id)?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `POST /`: store the body under a freshly generated id.
async fn create_gamer<S: RecordStore>(
    State(store): State<Arc<S>>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(fields) = body?;
    let stored = store.insert(Record::new(generate_id(), fields))?;
    tracing::info!(id = %stored.id(), "gamer created");
    Ok(Json(stored))
}

/// `PUT /:id`: merge the body into an existing gamer.
async fn update_gamer<S: RecordStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<Option<Record>>, ApiError> {
    let Json(fields) = body?;
    let updated = store.update_by_id(&id, fields)?;
    if updated.is_some() {
        tracing::info!(%id, "gamer updated");
    }
    Ok(Json(updated))
}

/// `DELETE /:id`: remove a gamer if present.
async fn delete_gamer<S: RecordStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete_by_id(&id)? {
        tracing::info!(%id, "gamer deleted");
    }
    Ok(StatusCode::OK)
}
