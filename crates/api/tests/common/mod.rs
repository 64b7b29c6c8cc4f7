#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use skillswap_api::config::{LogFormat, ServerConfig, StoreBackend};
use skillswap_api::router::build_app_router;
use skillswap_api::state::AppState;
use skillswap_db::store::{MemoryStore, PgStore, Store};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(store_backend: StoreBackend) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![header::HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        store_backend,
        database_url: None,
        database_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router around `store`.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<dyn Store>, store_backend: StoreBackend) -> Router {
    let config = test_config(store_backend);
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// App over a fresh in-memory store. Clone the router to send several
/// requests against the same store.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryStore::new()), StoreBackend::Memory)
}

/// App over the per-test database provided by `sqlx::test`.
pub fn pg_app(pool: PgPool) -> Router {
    build_test_app(Arc::new(PgStore::new(pool)), StoreBackend::Postgres)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, json).await
}

pub async fn patch_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, json).await
}

pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send_raw(app, method, uri, json.to_string()).await
}

/// Send a body verbatim with a JSON content type (for malformed payloads).
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a skill and return its id.
pub async fn create_skill(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/skills",
        serde_json::json!({
            "name": name,
            "canTeach": "Guitar",
            "wantsToLearn": "Piano",
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a connection and return its id.
pub async fn create_connection(app: &Router, from: i64, to: i64) -> i64 {
    let response = post_json(
        app,
        "/api/connections",
        serde_json::json!({ "fromSkillId": from, "toSkillId": to }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
