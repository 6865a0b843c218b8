//! Handlers for the `/vehicles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use motordesk_core::error::CoreError;
use motordesk_core::types::Id;
use motordesk_db::models::enums::VehicleStatus;
use motordesk_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use motordesk_db::repositories::VehicleRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    pub status: Option<String>,
}

/// GET /api/vehicles
///
/// An out-of-domain `status` value matches nothing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VehicleListQuery>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let status = match params.status.as_deref() {
        Some(raw) => match VehicleStatus::parse(raw) {
            Some(status) => Some(status),
            None => return Ok(Json(Vec::new())),
        },
        None => None,
    };

    let vehicles = VehicleRepo::list(&state.pool, status).await?;
    Ok(Json(vehicles))
}

/// GET /api/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// POST /api/vehicles
///
/// A duplicate reference surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    input.validate()?;
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// PATCH /api/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(input): JsonBody<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// DELETE /api/vehicles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    VehicleRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
