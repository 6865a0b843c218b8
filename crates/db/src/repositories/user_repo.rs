//! Repository for the `users` table.

use motordesk_core::types::Id;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list for `users` queries.
const COLUMNS: &str = "id, username, password, display_name, role";

/// Provides CRUD operations for dashboard users.
pub struct UserRepo;

impl UserRepo {
    /// List all users, ordered by username for a stable listing.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY username");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by its unique username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user, returning the created row. Role defaults to
    /// seller. A duplicate username violates `uq_users_username`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password, display_name, role)
             VALUES ($1, $2, $3, COALESCE($4, 'seller'::user_role))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password)
            .bind(&input.display_name)
            .bind(input.role)
            .fetch_one(pool)
            .await
    }

    /// Partially update a user, returning the updated row. The credential
    /// is not touched here; [`UpdateUser`] has no password field.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                display_name = COALESCE($3, display_name),
                role = COALESCE($4, role)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.display_name)
            .bind(input.role)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by ID. Returns `true` if a row was deleted; deleting
    /// a missing id is not an error.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
