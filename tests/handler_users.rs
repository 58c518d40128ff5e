mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_user_success(pool: PgPool) {
    let (server, _) = common::create_test_server(pool.clone());

    let response = server
        .post("/api/users")
        .json(&json!({ "email": "saul@bettercall.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["email"], "saul@bettercall.com");
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert!(!json["created_at"].as_str().unwrap().is_empty());
    assert!(!json["updated_at"].as_str().unwrap().is_empty());

    assert_eq!(common::count_rows(&pool, "users").await, 1);
}

#[sqlx::test]
async fn test_create_user_duplicate_email(pool: PgPool) {
    common::create_test_user(&pool, "dup@example.com").await;
    let (server, _) = common::create_test_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "email": "dup@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "email is already registered"
    );
}

#[sqlx::test]
async fn test_create_user_missing_email(pool: PgPool) {
    let (server, _) = common::create_test_server(pool.clone());

    let response = server.post("/api/users").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
    assert!(response.json::<Value>()["error"].is_string());
    assert_eq!(common::count_rows(&pool, "users").await, 0);
}
