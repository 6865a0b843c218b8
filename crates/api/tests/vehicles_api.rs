//! HTTP-level integration tests for the `/api/vehicles` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json};
use sqlx::PgPool;

fn sample_vehicle(reference: &str) -> serde_json::Value {
    serde_json::json!({
        "reference": reference,
        "brand": "Peugeot",
        "model": "208",
        "year": 2023,
        "fuel": "gasoline",
        "transmission": "manual",
        "mileage": 0,
        "price": 18000,
        "status": "available",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_vehicle_returns_201_with_defaults(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/vehicles", sample_vehicle("X-1")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert_eq!(json["reference"], "X-1");
    assert_eq!(json["status"], "available");
    assert_eq!(json["aiUsable"], true);
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_reference_returns_409(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let first = post_json(app, "/api/vehicles", sample_vehicle("X-1")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = build_test_app(pool);
    let second = post_json(app, "/api/vehicles", sample_vehicle("X-1")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_negative_mileage_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = sample_vehicle("NEG-1");
    payload["mileage"] = serde_json::json!(-5);
    let response = post_json(app, "/api/vehicles", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"]["mileage"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_vehicles_filtered_by_status(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/vehicles", sample_vehicle("AV-1")).await;

    let app = build_test_app(pool.clone());
    let mut sold = sample_vehicle("SO-1");
    sold["status"] = serde_json::json!("sold");
    post_json(app, "/api/vehicles", sold).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/vehicles?status=sold").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["reference"], "SO-1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_with_unknown_status_returns_empty(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/vehicles", sample_vehicle("AV-1")).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/vehicles?status=scrapped").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_vehicle_status(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/vehicles", sample_vehicle("RES-1")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/vehicles/{id}"),
        serde_json::json!({"status": "reserved", "price": 17500}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "reserved");
    assert_eq!(json["price"], 17500);
    // Untouched fields keep their values.
    assert_eq!(json["brand"], "Peugeot");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_nonexistent_vehicle_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = patch_json(
        app,
        "/api/vehicles/00000000-0000-0000-0000-000000000000",
        serde_json::json!({"price": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_vehicle_is_idempotent(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/vehicles/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
