//! Handlers for the `/clients` resource.
//!
//! Clients have no delete route: email cases and waitlist requests keep
//! weak references to them, so the collection only grows or is edited.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use motordesk_core::error::CoreError;
use motordesk_core::types::Id;
use motordesk_db::models::client::{Client, CreateClient, UpdateClient};
use motordesk_db::repositories::ClientRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.validate()?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PATCH /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(input): JsonBody<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}
