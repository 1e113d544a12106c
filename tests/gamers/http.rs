//! HTTP resource tests.
//!
//! Starts the axum app over an in-memory store and exercises it with reqwest.

use std::sync::Arc;

use gamers_api::{Fields, InMemoryRecordStore, Record, RecordStore, StoreError};
use serde_json::{json, Value};

use crate::support::{create, list, start_server};

/// Store whose reads succeed and whose writes always fail.
struct FailingStore;

impl RecordStore for FailingStore {
    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        Ok(Vec::new())
    }

    fn find_by_id(&self, _id: &str) -> Result<Option<Record>, StoreError> {
        Ok(None)
    }

    fn insert(&self, _record: Record) -> Result<Record, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }

    fn update_by_id(&self, _id: &str, _fields: Fields) -> Result<Option<Record>, StoreError> {
        Err(StoreError::LockPoisoned("record write"))
    }

    fn delete_by_id(&self, _id: &str) -> Result<bool, StoreError> {
        Err(StoreError::LockPoisoned("record write"))
    }
}

fn seeded_store() -> Arc<InMemoryRecordStore> {
    let fields = json!({ "title": "A", "author": "B" });
    Arc::new(InMemoryRecordStore::with_records(vec![Record::new(
        "x",
        fields.as_object().cloned().unwrap(),
    )]))
}

#[tokio::test]
async fn list_starts_empty() {
    let base = start_server(Arc::new(InMemoryRecordStore::new())).await;
    let client = reqwest::Client::new();

    assert!(list(&client, &base).await.is_empty());
}

#[tokio::test]
async fn create_then_get() {
    let base = start_server(Arc::new(InMemoryRecordStore::new())).await;
    let client = reqwest::Client::new();

    let created = create(
        &client,
        &base,
        json!({ "title": "Score = 100", "author": "A" }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 8);
    assert_eq!(created["title"], "Score = 100");
    assert_eq!(created["author"], "A");

    let resp = client
        .get(format!("{base}/gamers/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, created);
}

#[tokio::test]
async fn create_ignores_client_id() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, json!({ "id": "x", "title": "Other" })).await;
    assert_ne!(created["id"], "x");
    assert_eq!(list(&client, &base).await.len(), 2);
}

#[tokio::test]
async fn created_ids_are_distinct() {
    let base = start_server(Arc::new(InMemoryRecordStore::new())).await;
    let client = reqwest::Client::new();

    let a = create(&client, &base, json!({ "title": "A" })).await;
    let b = create(&client, &base, json!({ "title": "B" })).await;
    assert_ne!(a["id"], b["id"]);
}

#[tokio::test]
async fn list_reflects_inserts_in_order() {
    let store = seeded_store();
    let base = start_server(store.clone()).await;
    let client = reqwest::Client::new();

    let mut ids = vec!["x".to_string()];
    for score in 0..5 {
        let created = create(&client, &base, json!({ "score": score })).await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let listed: Vec<String> = list(&client, &base)
        .await
        .iter()
        .map(|g| g["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, ids);
    assert_eq!(store.list_all().unwrap().len(), 6);
}

#[tokio::test]
async fn get_absent_returns_404_with_empty_body() {
    let base = start_server(Arc::new(InMemoryRecordStore::new())).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/gamers/doesnotexist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_fields() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/gamers/x"))
        .json(&json!({ "title": "C", "id": "hijack" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": "x", "title": "C", "author": "B" }));

    let resp = client.get(format!("{base}/gamers/x")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": "x", "title": "C", "author": "B" }));
}

#[tokio::test]
async fn update_absent_returns_200_null() {
    let store = Arc::new(InMemoryRecordStore::new());
    let base = start_server(store.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/gamers/nope"))
        .json(&json!({ "title": "C" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body.is_null());
    assert!(store.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn delete_existing_removes_one() {
    let store = seeded_store();
    let base = start_server(store.clone()).await;
    let client = reqwest::Client::new();
    create(&client, &base, json!({ "title": "keep" })).await;

    let resp = client
        .delete(format!("{base}/gamers/x"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().is_empty());

    let remaining = list(&client, &base).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["title"], "keep");
}

#[tokio::test]
async fn delete_absent_is_still_200() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/gamers/nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(list(&client, &base).await.len(), 1);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let store = Arc::new(InMemoryRecordStore::new());
    let base = start_server(store.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/gamers"))
        .header("content-type", "application/json")
        .body("{ \"title\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(store.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let base = start_server(seeded_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/gamers/x"))
        .json(&json!(["title", "C"]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let base = start_server(Arc::new(InMemoryRecordStore::new())).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/gamers"))
        .body(r#"{ "title": "A" }"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn cors_headers_are_permissive() {
    let base = start_server(Arc::new(InMemoryRecordStore::new())).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/gamers"))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn create_store_failure_returns_500() {
    let base = start_server(Arc::new(FailingStore)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/gamers"))
        .json(&json!({ "title": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "store io error: disk full");
}

#[tokio::test]
async fn update_store_failure_returns_500() {
    let base = start_server(Arc::new(FailingStore)).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/gamers/x"))
        .json(&json!({ "title": "C" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("lock poisoned"));
}
