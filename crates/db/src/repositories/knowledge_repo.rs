//! Repository for the `knowledge_items` table.
//!
//! Every update refreshes `updated_at`, so the timestamp strictly
//! increases across successive mutations of the same item.

use motordesk_core::types::Id;
use sqlx::PgPool;

use crate::models::knowledge_item::{CreateKnowledgeItem, KnowledgeItem, UpdateKnowledgeItem};

/// Column list for `knowledge_items` queries.
const COLUMNS: &str = "id, category, key, value, updated_at, updated_by";

/// Provides CRUD operations for knowledge base items.
pub struct KnowledgeRepo;

impl KnowledgeRepo {
    /// List knowledge items, optionally filtered by category. Ordered
    /// by (category, key) so the listing stays stable across in-place
    /// updates.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<KnowledgeItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM knowledge_items
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY category, key"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find a knowledge item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<KnowledgeItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_items WHERE id = $1");
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new knowledge item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateKnowledgeItem,
    ) -> Result<KnowledgeItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO knowledge_items (category, key, value, updated_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(&input.category)
            .bind(&input.key)
            .bind(&input.value)
            .bind(input.updated_by)
            .fetch_one(pool)
            .await
    }

    /// Partially update a knowledge item, returning the updated row.
    /// `updated_at` is always refreshed, whatever fields changed.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateKnowledgeItem,
    ) -> Result<Option<KnowledgeItem>, sqlx::Error> {
        let query = format!(
            "UPDATE knowledge_items SET
                category = COALESCE($2, category),
                key = COALESCE($3, key),
                value = COALESCE($4, value),
                updated_by = COALESCE($5, updated_by),
                updated_at = clock_timestamp()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeItem>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(&input.key)
            .bind(&input.value)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a knowledge item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM knowledge_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
