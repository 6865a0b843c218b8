//! Handlers for the `/knowledge` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use motordesk_core::error::CoreError;
use motordesk_core::types::Id;
use motordesk_db::models::knowledge_item::{
    CreateKnowledgeItem, KnowledgeItem, UpdateKnowledgeItem,
};
use motordesk_db::repositories::KnowledgeRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct KnowledgeListQuery {
    pub category: Option<String>,
}

/// GET /api/knowledge
///
/// Category is free text, so any value is a legal filter; an unknown
/// category simply matches no rows.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<KnowledgeListQuery>,
) -> AppResult<Json<Vec<KnowledgeItem>>> {
    let items = KnowledgeRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(items))
}

/// GET /api/knowledge/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> AppResult<Json<KnowledgeItem>> {
    let item = KnowledgeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "KnowledgeItem",
            id,
        }))?;
    Ok(Json(item))
}

/// POST /api/knowledge
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateKnowledgeItem>,
) -> AppResult<(StatusCode, Json<KnowledgeItem>)> {
    input.validate()?;
    let item = KnowledgeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/knowledge/{id}
///
/// Every successful update refreshes `updatedAt`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(input): JsonBody<UpdateKnowledgeItem>,
) -> AppResult<Json<KnowledgeItem>> {
    let item = KnowledgeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "KnowledgeItem",
            id,
        }))?;
    Ok(Json(item))
}

/// DELETE /api/knowledge/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Id>) -> AppResult<StatusCode> {
    KnowledgeRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
