//! Repository for the `clients` table.
//!
//! Clients have no delete operation: email cases and waitlist requests
//! keep weak references to them, and the dashboard never removes a
//! customer record.

use motordesk_core::types::Id;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list for `clients` queries.
const COLUMNS: &str = "id, name, email, phone, sms_consent, notes, created_at";

/// Provides CRUD (minus delete) operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List all clients, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email, phone, sms_consent, notes)
             VALUES ($1, $2, $3, COALESCE($4, FALSE), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.sms_consent)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Partially update a client, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                sms_consent = COALESCE($5, sms_consent),
                notes = COALESCE($6, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.sms_consent)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }
}
