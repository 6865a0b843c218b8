//! Handlers for the `/waitlist` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use motordesk_core::error::CoreError;
use motordesk_core::types::Id;
use motordesk_db::models::enums::WaitlistStatus;
use motordesk_db::models::waitlist_request::{
    CreateWaitlistRequest, UpdateWaitlistRequest, WaitlistRequest,
};
use motordesk_db::repositories::WaitlistRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WaitlistListQuery {
    pub status: Option<String>,
}

/// GET /api/waitlist
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WaitlistListQuery>,
) -> AppResult<Json<Vec<WaitlistRequest>>> {
    let status = match params.status.as_deref() {
        Some(raw) => match WaitlistStatus::parse(raw) {
            Some(status) => Some(status),
            None => return Ok(Json(Vec::new())),
        },
        None => None,
    };

    let requests = WaitlistRepo::list(&state.pool, status).await?;
    Ok(Json(requests))
}

/// GET /api/waitlist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<WaitlistRequest>> {
    let request = WaitlistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WaitlistRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// POST /api/waitlist
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateWaitlistRequest>,
) -> AppResult<(StatusCode, Json<WaitlistRequest>)> {
    input.validate()?;
    let request = WaitlistRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// PATCH /api/waitlist/{id}
///
/// Moving a request to `contacted` stamps `lastContactedAt` server-side.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(input): JsonBody<UpdateWaitlistRequest>,
) -> AppResult<Json<WaitlistRequest>> {
    let request = WaitlistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WaitlistRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// DELETE /api/waitlist/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    WaitlistRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
