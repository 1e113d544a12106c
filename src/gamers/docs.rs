//! Browsable API description.
//!
//! `GET /api-docs` renders Swagger UI over the OpenAPI document served at
//! `GET /api-docs/openapi.json`. Informational only; nothing else reads it.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Mount point of the documentation page.
pub const DOCS_PATH: &str = "/api-docs";

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Gamers API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Build the OpenAPI 3.0 description of the gamer resource.
pub fn openapi_document(server_url: &str) -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Gamers API",
            "version": "1.0.0",
            "description": "A simple gamers ranking"
        },
        "servers": [ { "url": server_url } ],
        "tags": [ { "name": "Gamers", "description": "The Gamers managing API" } ],
        "components": { "schemas": { "Gamer": gamer_schema() } },
        "paths": {
            "/gamers": collection_operations(),
            "/gamers/{id}": item_operations()
        }
    })
}

fn gamer_schema() -> Value {
    json!({
        "type": "object",
        "required": ["title", "author"],
        "properties": {
            "id": { "type": "string", "description": "The auto-generated id of the Gamer" },
            "title": { "type": "string", "description": "The Gamer title" },
            "author": { "type": "string", "description": "The Gamer author" }
        },
        "additionalProperties": true,
        "example": { "id": "d5fE_asz", "title": "Score = 100", "author": "Allen B. Downey" }
    })
}

fn gamer_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Gamer" })
}

fn gamer_body() -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": gamer_ref() } }
    })
}

fn gamer_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": gamer_ref() } }
    })
}

fn id_param() -> Value {
    json!({
        "in": "path",
        "name": "id",
        "schema": { "type": "string" },
        "required": true,
        "description": "The Gamer id"
    })
}

fn collection_operations() -> Value {
    let list = json!({
        "summary": "Returns the list of all the Gamers",
        "tags": ["Gamers"],
        "responses": {
            "200": {
                "description": "The list of the Gamers",
                "content": {
                    "application/json": { "schema": { "type": "array", "items": gamer_ref() } }
                }
            }
        }
    });
    let create = json!({
        "summary": "Create a new Gamer",
        "tags": ["Gamers"],
        "requestBody": gamer_body(),
        "responses": {
            "200": gamer_response("The Gamer was successfully created"),
            "400": { "description": "Malformed request body" },
            "500": { "description": "Some server error" }
        }
    });
    json!({ "get": list, "post": create })
}

fn item_operations() -> Value {
    let fetch = json!({
        "summary": "Get the Gamer by id",
        "tags": ["Gamers"],
        "parameters": [id_param()],
        "responses": {
            "200": gamer_response("The Gamer description by id"),
            "404": { "description": "The Gamer was not found" }
        }
    });
    let update = json!({
        "summary": "Update the Gamer by the id",
        "tags": ["Gamers"],
        "parameters": [id_param()],
        "requestBody": gamer_body(),
        "responses": {
            "200": gamer_response("The Gamer was updated (null if no Gamer has the id)"),
            "400": { "description": "Malformed request body" },
            "500": { "description": "Some error happened" }
        }
    });
    let remove = json!({
        "summary": "Remove the Gamer by id",
        "tags": ["Gamers"],
        "parameters": [id_param()],
        "responses": {
            "200": { "description": "The Gamer was deleted (or did not exist)" }
        }
    });
    json!({ "get": fetch, "put": update, "delete": remove })
}

/// Build a `Router` serving the documentation page and its OpenAPI document.
pub fn router(document: Value) -> Router {
    Router::new()
        .route(DOCS_PATH, get(docs_page))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(Arc::new(document))
}

async fn docs_page() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

async fn openapi_json(State(document): State<Arc<Value>>) -> Json<Value> {
    Json(document.as_ref().clone())
}
