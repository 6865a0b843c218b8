//! Repository for the `daily_stats` table.
//!
//! The HTTP surface only reads these rows; create/update exist for the
//! external analytics process and the seed routine. There is no delete:
//! snapshots are append-mostly history.

use motordesk_core::types::Id;
use sqlx::PgPool;

use crate::models::daily_stats::{CreateDailyStats, DailyStats, UpdateDailyStats};

/// Column list for `daily_stats` queries.
const COLUMNS: &str = "\
    id, date, total_emails, ai_responses, human_escalations, \
    avg_response_time_minutes, total_calls, ai_handled_calls, \
    transferred_calls, avg_call_duration_seconds, waitlist_conversions";

/// Provides read/write operations for daily statistics snapshots.
pub struct DailyStatsRepo;

impl DailyStatsRepo {
    /// List all snapshots, most recent date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DailyStats>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_stats ORDER BY date DESC");
        sqlx::query_as::<_, DailyStats>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a snapshot by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<DailyStats>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_stats WHERE id = $1");
        sqlx::query_as::<_, DailyStats>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a snapshot, returning the created row. Counters default to 0.
    pub async fn create(pool: &PgPool, input: &CreateDailyStats) -> Result<DailyStats, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_stats (
                date, total_emails, ai_responses, human_escalations,
                avg_response_time_minutes, total_calls, ai_handled_calls,
                transferred_calls, avg_call_duration_seconds,
                waitlist_conversions)
             VALUES ($1, COALESCE($2, 0), COALESCE($3, 0), COALESCE($4, 0),
                     $5, COALESCE($6, 0), COALESCE($7, 0), COALESCE($8, 0),
                     $9, COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyStats>(&query)
            .bind(input.date)
            .bind(input.total_emails)
            .bind(input.ai_responses)
            .bind(input.human_escalations)
            .bind(input.avg_response_time_minutes)
            .bind(input.total_calls)
            .bind(input.ai_handled_calls)
            .bind(input.transferred_calls)
            .bind(input.avg_call_duration_seconds)
            .bind(input.waitlist_conversions)
            .fetch_one(pool)
            .await
    }

    /// Partially update a snapshot, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateDailyStats,
    ) -> Result<Option<DailyStats>, sqlx::Error> {
        let query = format!(
            "UPDATE daily_stats SET
                date = COALESCE($2, date),
                total_emails = COALESCE($3, total_emails),
                ai_responses = COALESCE($4, ai_responses),
                human_escalations = COALESCE($5, human_escalations),
                avg_response_time_minutes = COALESCE($6, avg_response_time_minutes),
                total_calls = COALESCE($7, total_calls),
                ai_handled_calls = COALESCE($8, ai_handled_calls),
                transferred_calls = COALESCE($9, transferred_calls),
                avg_call_duration_seconds = COALESCE($10, avg_call_duration_seconds),
                waitlist_conversions = COALESCE($11, waitlist_conversions)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyStats>(&query)
            .bind(id)
            .bind(input.date)
            .bind(input.total_emails)
            .bind(input.ai_responses)
            .bind(input.human_escalations)
            .bind(input.avg_response_time_minutes)
            .bind(input.total_calls)
            .bind(input.ai_handled_calls)
            .bind(input.transferred_calls)
            .bind(input.avg_call_duration_seconds)
            .bind(input.waitlist_conversions)
            .fetch_optional(pool)
            .await
    }
}
