//! HTTP-level tests for the connection lifecycle.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_connection, create_skill, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_connection_is_pending() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;

    let response = post_json(
        &app,
        "/api/connections",
        json!({"fromSkillId": alice, "toSkillId": bob, "message": "Hi"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["fromSkillId"], alice);
    assert_eq!(json["toSkillId"], bob);
    assert_eq!(json["message"], "Hi");
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn client_supplied_status_is_ignored() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;

    let response = post_json(
        &app,
        "/api/connections",
        json!({"fromSkillId": alice, "toSkillId": bob, "status": "accepted"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert!(json["message"].is_null());
}

#[tokio::test]
async fn invalid_connection_payload_returns_field_errors() {
    let app = common::memory_app();
    let response = post_json(&app, "/api/connections", json!({"fromSkillId": "one"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "fromSkillId");
    assert_eq!(errors[1]["field"], "toSkillId");
}

#[tokio::test]
async fn dangling_reference_is_a_storage_failure_in_memory() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;

    let response = post_json(
        &app,
        "/api/connections",
        json!({"fromSkillId": alice, "toSkillId": 2, "message": "Hi"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Status lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_lookup_is_directional() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;
    create_connection(&app, bob, alice).await;

    let response = get(
        &app,
        &format!("/api/connections/status?fromSkillId={alice}&toSkillId={bob}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"connection": null}));

    let response = get(
        &app,
        &format!("/api/connections/status?fromSkillId={bob}&toSkillId={alice}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["connection"]["status"], "pending");
}

#[tokio::test]
async fn status_lookup_requires_both_params() {
    let app = common::memory_app();

    let response = get(&app, "/api/connections/status?fromSkillId=1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "fromSkillId and toSkillId are required");

    let response = get(&app, "/api/connections/status?fromSkillId=1&toSkillId=x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Status update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn accepted_status_is_reflected_in_lookup() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;
    let id = create_connection(&app, alice, bob).await;

    let response = patch_json(
        &app,
        &format!("/api/connections/{id}"),
        json!({"status": "accepted"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "accepted");

    let response = get(
        &app,
        &format!("/api/connections/status?fromSkillId={alice}&toSkillId={bob}"),
    )
    .await;
    assert_eq!(body_json(response).await["connection"]["status"], "accepted");
}

#[tokio::test]
async fn rejected_status_is_final() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;
    let id = create_connection(&app, alice, bob).await;
    let uri = format!("/api/connections/{id}");

    let response = patch_json(&app, &uri, json!({"status": "rejected"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = patch_json(&app, &uri, json!({"status": "accepted"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = get(
        &app,
        &format!("/api/connections/status?fromSkillId={alice}&toSkillId={bob}"),
    )
    .await;
    assert_eq!(body_json(response).await["connection"]["status"], "rejected");
}

#[tokio::test]
async fn invalid_status_leaves_connection_unchanged() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;
    let id = create_connection(&app, alice, bob).await;
    let uri = format!("/api/connections/{id}");

    for body in [json!({"status": "pending"}), json!({"status": "maybe"}), json!({})] {
        let response = patch_json(&app, &uri, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = get(
        &app,
        &format!("/api/connections/status?fromSkillId={alice}&toSkillId={bob}"),
    )
    .await;
    assert_eq!(body_json(response).await["connection"]["status"], "pending");
}

#[tokio::test]
async fn unknown_connection_returns_404() {
    let app = common::memory_app();
    let response = patch_json(&app, "/api/connections/77", json!({"status": "accepted"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Connection with id 77 not found");
}

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let app = common::memory_app();
    let response = patch_json(&app, "/api/connections/abc", json!({"status": "accepted"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Outgoing list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn outgoing_connections_exclude_incoming() {
    let app = common::memory_app();
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;
    create_connection(&app, alice, bob).await;
    create_connection(&app, bob, alice).await;

    let response = get(&app, &format!("/api/skills/{alice}/connections")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["toSkillId"], bob);
}

// ---------------------------------------------------------------------------
// PostgreSQL backing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn pg_dangling_reference_is_a_storage_failure(pool: PgPool) {
    let app = common::pg_app(pool);
    let alice = create_skill(&app, "Alice").await;

    let response = post_json(
        &app,
        "/api/connections",
        json!({"fromSkillId": alice, "toSkillId": alice + 1, "message": "Hi"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pg_full_lifecycle(pool: PgPool) {
    let app = common::pg_app(pool);
    let alice = create_skill(&app, "Alice").await;
    let bob = create_skill(&app, "Bob").await;
    let id = create_connection(&app, alice, bob).await;
    let uri = format!("/api/connections/{id}");

    let response = patch_json(&app, &uri, json!({"status": "accepted"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        &app,
        &format!("/api/connections/status?fromSkillId={alice}&toSkillId={bob}"),
    )
    .await;
    assert_eq!(body_json(response).await["connection"]["status"], "accepted");

    let response = patch_json(&app, &uri, json!({"status": "rejected"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = patch_json(&app, "/api/connections/999999", json!({"status": "rejected"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
