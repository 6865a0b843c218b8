//! HTTP-level integration tests for the `/api/emails` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json};
use sqlx::PgPool;

fn sample_email(subject: &str) -> serde_json::Value {
    serde_json::json!({
        "subject": subject,
        "content": "Bonjour, je cherche une citadine d'occasion.",
        "senderEmail": "client@example.com",
        "senderName": "Jean Client",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_email_returns_201_with_defaults(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/emails", sample_email("Demande de devis")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["subject"], "Demande de devis");
    assert_eq!(json["status"], "new");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["needsHuman"], true);
    assert!(json["repliedAt"].is_null());
    assert!(json["id"].is_string());
    assert!(json["receivedAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_email_by_id_round_trip(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/emails", sample_email("Essai routier")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/emails/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["subject"], "Essai routier");
    assert_eq!(json["senderEmail"], "client@example.com");
    assert_eq!(json["id"], created["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_email_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/emails/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_email_with_invalid_sender_email_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = sample_email("Bad sender");
    payload["senderEmail"] = serde_json::json!("not-an-address");
    let response = post_json(app, "/api/emails", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"]["senderEmail"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_email_with_missing_subject_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/emails",
        serde_json::json!({"content": "sans sujet", "senderEmail": "x@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_email_with_out_of_domain_status_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = sample_email("Statut inconnu");
    payload["status"] = serde_json::json!("archived");
    let response = post_json(app, "/api/emails", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_to_replied_stamps_replied_at(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/emails", sample_email("A répondre")).await).await;
    let id = created["id"].as_str().unwrap();
    assert!(created["repliedAt"].is_null());

    let app = build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/emails/{id}"),
        serde_json::json!({"status": "replied"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "replied");
    assert!(json["repliedAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_re_replying_restamps_replied_at(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/emails", sample_email("Relance")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool.clone());
    let first = body_json(
        patch_json(
            app,
            &format!("/api/emails/{id}"),
            serde_json::json!({"status": "replied"}),
        )
        .await,
    )
    .await;
    let first_stamp: chrono::DateTime<chrono::Utc> =
        first["repliedAt"].as_str().unwrap().parse().unwrap();

    // Setting the same status again stamps a fresh timestamp.
    let app = build_test_app(pool);
    let second = body_json(
        patch_json(
            app,
            &format!("/api/emails/{id}"),
            serde_json::json!({"status": "replied"}),
        )
        .await,
    )
    .await;
    let second_stamp: chrono::DateTime<chrono::Utc> =
        second["repliedAt"].as_str().unwrap().parse().unwrap();
    assert!(second_stamp > first_stamp);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_other_fields_leaves_replied_at_null(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/emails", sample_email("En cours")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool);
    let json = body_json(
        patch_json(
            app,
            &format!("/api/emails/{id}"),
            serde_json::json!({"status": "in_progress", "internalNotes": "vu"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["internalNotes"], "vu");
    assert!(json["repliedAt"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_combine_with_and(pool: PgPool) {
    // Three emails; only one is both new and high priority.
    let app = build_test_app(pool.clone());
    let mut target = sample_email("Urgent: panne après achat");
    target["priority"] = serde_json::json!("high");
    post_json(app, "/api/emails", target).await;

    let app = build_test_app(pool.clone());
    let mut low = sample_email("Question horaires");
    low["priority"] = serde_json::json!("low");
    post_json(app, "/api/emails", low).await;

    let app = build_test_app(pool.clone());
    let mut replied = sample_email("Déjà traité");
    replied["priority"] = serde_json::json!("high");
    replied["status"] = serde_json::json!("replied");
    post_json(app, "/api/emails", replied).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/emails?status=new&priority=high").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["subject"], "Urgent: panne après achat");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_with_unknown_status_returns_empty(pool: PgPool) {
    let app = build_test_app(pool.clone());
    post_json(app, "/api/emails", sample_email("Quelque chose")).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/emails?status=bogus").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_needs_human_filter(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let mut handled = sample_email("Réglé par l'IA");
    handled["needsHuman"] = serde_json::json!(false);
    post_json(app, "/api/emails", handled).await;

    let app = build_test_app(pool.clone());
    post_json(app, "/api/emails", sample_email("Besoin d'un humain")).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/emails?needsHuman=false").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["subject"], "Réglé par l'IA");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_email_returns_204(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/emails", sample_email("Bye")).await).await;
    let id = created["id"].as_str().unwrap();

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/emails/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = build_test_app(pool);
    let response = get(app, &format!("/api/emails/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_email_is_idempotent(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/emails/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
