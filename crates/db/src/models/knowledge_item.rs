//! Knowledge base item model and DTOs.
//!
//! Key/value facts grouped by free-text category (hours, contact,
//! procedure, ai_rules, faq, ...), used to brief the external AI
//! assistant. `updated_at` is refreshed by the repository on every update.

use motordesk_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `knowledge_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    pub id: Id,
    pub category: String,
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
    pub updated_by: Option<Id>,
}

/// DTO for creating a knowledge item.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeItem {
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "key must not be empty"))]
    pub key: String,
    pub value: String,
    pub updated_by: Option<Id>,
}

/// DTO for partially updating a knowledge item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKnowledgeItem {
    pub category: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
    pub updated_by: Option<Id>,
}
