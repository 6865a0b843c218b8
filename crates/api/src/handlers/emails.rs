//! Handlers for the `/emails` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use motordesk_core::error::CoreError;
use motordesk_core::types::Id;
use motordesk_db::models::email_case::{
    CreateEmailCase, EmailCase, EmailCaseFilter, UpdateEmailCase,
};
use motordesk_db::models::enums::{EmailStatus, Priority};
use motordesk_db::repositories::EmailCaseRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Raw query parameters for `GET /api/emails`.
///
/// Values are kept as strings so an out-of-domain value yields an empty
/// list instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub needs_human: Option<String>,
}

/// GET /api/emails
///
/// List email cases, newest first, filtered by status, priority and
/// needs-human (AND-combined). Filters are equality matches only: a value
/// outside the domain matches nothing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EmailListQuery>,
) -> AppResult<Json<Vec<EmailCase>>> {
    let mut filter = EmailCaseFilter::default();

    if let Some(raw) = params.status.as_deref() {
        match EmailStatus::parse(raw) {
            Some(status) => filter.status = Some(status),
            None => return Ok(Json(Vec::new())),
        }
    }
    if let Some(raw) = params.priority.as_deref() {
        match Priority::parse(raw) {
            Some(priority) => filter.priority = Some(priority),
            None => return Ok(Json(Vec::new())),
        }
    }
    if let Some(raw) = params.needs_human.as_deref() {
        match raw.parse::<bool>() {
            Ok(needs_human) => filter.needs_human = Some(needs_human),
            Err(_) => return Ok(Json(Vec::new())),
        }
    }

    let emails = EmailCaseRepo::list(&state.pool, &filter).await?;
    Ok(Json(emails))
}

/// GET /api/emails/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<EmailCase>> {
    let email = EmailCaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailCase",
            id,
        }))?;
    Ok(Json(email))
}

/// POST /api/emails
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateEmailCase>,
) -> AppResult<(StatusCode, Json<EmailCase>)> {
    input.validate()?;
    let email = EmailCaseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(email)))
}

/// PATCH /api/emails/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(input): JsonBody<UpdateEmailCase>,
) -> AppResult<Json<EmailCase>> {
    let email = EmailCaseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailCase",
            id,
        }))?;
    Ok(Json(email))
}

/// DELETE /api/emails/{id}
///
/// Idempotent: deleting a missing id still answers 204.
pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    EmailCaseRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
