//! HTTP-level integration tests for the `/api/users` endpoints.
//!
//! The credential-redaction property is load-bearing: no user response,
//! under any input, may carry a `password` key.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json};
use sqlx::PgPool;

fn sample_user(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": "s3cret",
        "displayName": "Test User",
        "role": "seller",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_response_has_no_password(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/users", sample_user("marc.lefevre")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "marc.lefevre");
    assert_eq!(json["role"], "seller");
    assert!(json.get("password").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_has_no_password(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/users", sample_user("a.one")).await;
    let app = build_test_app(pool.clone());
    post_json(app, "/api/users", sample_user("b.two")).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/users").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert!(item.get("password").is_none());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_defaults_to_seller_role(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/users",
        serde_json::json!({"username": "no.role", "password": "pw"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["role"], "seller");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_username_returns_409(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let first = post_json(app, "/api/users", sample_user("dup.user")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = build_test_app(pool);
    let second = post_json(app, "/api/users", sample_user("dup.user")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_ignores_password_key(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/users", sample_user("patch.me")).await).await;
    let id = created["id"].as_str().unwrap();

    // A password key in the body is dropped, not applied and not echoed.
    let app = build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/users/{id}"),
        serde_json::json!({"displayName": "Renamed", "password": "hacked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["displayName"], "Renamed");
    assert!(json.get("password").is_none());

    // The stored credential is untouched.
    let password: String = sqlx::query_scalar("SELECT password FROM users WHERE username = $1")
        .bind("patch.me")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(password, "s3cret");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_role_change(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/users", sample_user("promote.me")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool);
    let json = body_json(
        patch_json(
            app,
            &format!("/api/users/{id}"),
            serde_json::json!({"role": "admin"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["role"], "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user_then_404(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/users", sample_user("gone.soon")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
