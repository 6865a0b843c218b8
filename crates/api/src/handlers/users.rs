//! Handlers for the `/users` resource.
//!
//! Every response goes through [`SafeUser`], so the stored credential
//! never reaches the wire. The update DTO has no password field either;
//! a `password` key in a PATCH body is silently dropped.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use motordesk_core::error::CoreError;
use motordesk_core::types::Id;
use motordesk_db::models::user::{CreateUser, SafeUser, UpdateUser};
use motordesk_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SafeUser>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(SafeUser::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<SafeUser>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(SafeUser::from(user)))
}

/// POST /api/users
///
/// A duplicate username violates `uq_users_username` and surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<SafeUser>)> {
    input.validate()?;
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(SafeUser::from(user))))
}

/// PATCH /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(input): JsonBody<UpdateUser>,
) -> AppResult<Json<SafeUser>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(SafeUser::from(user)))
}

/// DELETE /api/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    UserRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
