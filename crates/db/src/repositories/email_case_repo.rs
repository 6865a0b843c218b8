//! Repository for the `email_cases` table.
//!
//! Carries the one derived-state rule for emails: an update whose payload
//! sets `status = replied` also stamps `replied_at` with the current time,
//! in the same UPDATE statement. The stamp fires on the value in *this*
//! call, not on the prior row state, so re-setting an already-replied case
//! re-stamps the timestamp.

use chrono::Utc;
use motordesk_core::types::{Id, Timestamp};
use sqlx::PgPool;

use crate::models::email_case::{CreateEmailCase, EmailCase, EmailCaseFilter, UpdateEmailCase};
use crate::models::enums::EmailStatus;

/// Column list for `email_cases` queries.
const COLUMNS: &str = "\
    id, client_id, subject, content, sender_email, sender_name, attachments, \
    status, priority, ai_reason, needs_human, assigned_to, vehicle_id, \
    internal_notes, draft_response, received_at, replied_at";

/// Provides CRUD operations for email cases.
pub struct EmailCaseRepo;

impl EmailCaseRepo {
    /// List email cases newest first, optionally filtered by status,
    /// priority and needs-human. Filters combine with AND.
    pub async fn list(
        pool: &PgPool,
        filter: &EmailCaseFilter,
    ) -> Result<Vec<EmailCase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM email_cases
             WHERE ($1::email_status IS NULL OR status = $1)
               AND ($2::email_priority IS NULL OR priority = $2)
               AND ($3::BOOLEAN IS NULL OR needs_human = $3)
             ORDER BY received_at DESC"
        );
        sqlx::query_as::<_, EmailCase>(&query)
            .bind(filter.status)
            .bind(filter.priority)
            .bind(filter.needs_human)
            .fetch_all(pool)
            .await
    }

    /// Find an email case by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<EmailCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM email_cases WHERE id = $1");
        sqlx::query_as::<_, EmailCase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new email case, returning the created row. Status defaults
    /// to new, priority to medium, needs-human to true; `received_at` is
    /// stamped by the database.
    pub async fn create(pool: &PgPool, input: &CreateEmailCase) -> Result<EmailCase, sqlx::Error> {
        let query = format!(
            "INSERT INTO email_cases (
                client_id, subject, content, sender_email, sender_name,
                attachments, status, priority, ai_reason, needs_human,
                assigned_to, vehicle_id, internal_notes, draft_response)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'new'::email_status),
                     COALESCE($8, 'medium'::email_priority),
                     $9, COALESCE($10, TRUE), $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailCase>(&query)
            .bind(input.client_id)
            .bind(&input.subject)
            .bind(&input.content)
            .bind(&input.sender_email)
            .bind(&input.sender_name)
            .bind(&input.attachments)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.ai_reason)
            .bind(input.needs_human)
            .bind(input.assigned_to)
            .bind(input.vehicle_id)
            .bind(&input.internal_notes)
            .bind(&input.draft_response)
            .fetch_one(pool)
            .await
    }

    /// Partially update an email case, returning the updated row.
    ///
    /// When the payload sets `status = replied`, `replied_at` is set to
    /// the current time in the same statement, whether or not the caller
    /// supplied it. No other transition touches `replied_at`.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateEmailCase,
    ) -> Result<Option<EmailCase>, sqlx::Error> {
        let replied_at: Option<Timestamp> = if input.status == Some(EmailStatus::Replied) {
            Some(Utc::now())
        } else {
            None
        };

        let query = format!(
            "UPDATE email_cases SET
                client_id = COALESCE($2, client_id),
                subject = COALESCE($3, subject),
                content = COALESCE($4, content),
                sender_email = COALESCE($5, sender_email),
                sender_name = COALESCE($6, sender_name),
                attachments = COALESCE($7, attachments),
                status = COALESCE($8, status),
                priority = COALESCE($9, priority),
                ai_reason = COALESCE($10, ai_reason),
                needs_human = COALESCE($11, needs_human),
                assigned_to = COALESCE($12, assigned_to),
                vehicle_id = COALESCE($13, vehicle_id),
                internal_notes = COALESCE($14, internal_notes),
                draft_response = COALESCE($15, draft_response),
                replied_at = COALESCE($16, replied_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailCase>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(&input.subject)
            .bind(&input.content)
            .bind(&input.sender_email)
            .bind(&input.sender_name)
            .bind(&input.attachments)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.ai_reason)
            .bind(input.needs_human)
            .bind(input.assigned_to)
            .bind(input.vehicle_id)
            .bind(&input.internal_notes)
            .bind(&input.draft_response)
            .bind(replied_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete an email case by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM email_cases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
