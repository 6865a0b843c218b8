//! Repository for the `waitlist_requests` table.
//!
//! Carries the derived-state rule for waitlist entries: an update whose
//! payload sets `status = contacted` also refreshes `last_contacted_at`,
//! in the same UPDATE statement. As with email replies, the stamp keys on
//! the value set by *this* call, so repeating the transition re-stamps.

use chrono::Utc;
use motordesk_core::types::{Id, Timestamp};
use sqlx::PgPool;

use crate::models::enums::WaitlistStatus;
use crate::models::waitlist_request::{
    CreateWaitlistRequest, UpdateWaitlistRequest, WaitlistRequest,
};

/// Column list for `waitlist_requests` queries.
const COLUMNS: &str = "\
    id, client_id, client_name, phone, sms_consent, status, priority, \
    brand_preference, model_preference, year_min, year_max, fuel_preference, \
    transmission_preference, max_mileage, max_budget, color_preference, \
    notes, contact_history, created_at, last_contacted_at";

/// Provides CRUD operations for waitlist requests.
pub struct WaitlistRepo;

impl WaitlistRepo {
    /// List waitlist requests newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<WaitlistStatus>,
    ) -> Result<Vec<WaitlistRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM waitlist_requests
             WHERE ($1::waitlist_status IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, WaitlistRequest>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Find a waitlist request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: Id,
    ) -> Result<Option<WaitlistRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlist_requests WHERE id = $1");
        sqlx::query_as::<_, WaitlistRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new waitlist request, returning the created row. Status
    /// defaults to waiting and priority to medium.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWaitlistRequest,
    ) -> Result<WaitlistRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO waitlist_requests (
                client_id, client_name, phone, sms_consent, status, priority,
                brand_preference, model_preference, year_min, year_max,
                fuel_preference, transmission_preference, max_mileage,
                max_budget, color_preference, notes, contact_history)
             VALUES ($1, $2, $3, COALESCE($4, FALSE),
                     COALESCE($5, 'waiting'::waitlist_status),
                     COALESCE($6, 'medium'::email_priority),
                     $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistRequest>(&query)
            .bind(input.client_id)
            .bind(&input.client_name)
            .bind(&input.phone)
            .bind(input.sms_consent)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.brand_preference)
            .bind(&input.model_preference)
            .bind(input.year_min)
            .bind(input.year_max)
            .bind(input.fuel_preference)
            .bind(input.transmission_preference)
            .bind(input.max_mileage)
            .bind(input.max_budget)
            .bind(&input.color_preference)
            .bind(&input.notes)
            .bind(&input.contact_history)
            .fetch_one(pool)
            .await
    }

    /// Partially update a waitlist request, returning the updated row.
    ///
    /// When the payload sets `status = contacted`, `last_contacted_at` is
    /// refreshed in the same statement. No other transition touches it.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateWaitlistRequest,
    ) -> Result<Option<WaitlistRequest>, sqlx::Error> {
        let last_contacted_at: Option<Timestamp> =
            if input.status == Some(WaitlistStatus::Contacted) {
                Some(Utc::now())
            } else {
                None
            };

        let query = format!(
            "UPDATE waitlist_requests SET
                client_id = COALESCE($2, client_id),
                client_name = COALESCE($3, client_name),
                phone = COALESCE($4, phone),
                sms_consent = COALESCE($5, sms_consent),
                status = COALESCE($6, status),
                priority = COALESCE($7, priority),
                brand_preference = COALESCE($8, brand_preference),
                model_preference = COALESCE($9, model_preference),
                year_min = COALESCE($10, year_min),
                year_max = COALESCE($11, year_max),
                fuel_preference = COALESCE($12, fuel_preference),
                transmission_preference = COALESCE($13, transmission_preference),
                max_mileage = COALESCE($14, max_mileage),
                max_budget = COALESCE($15, max_budget),
                color_preference = COALESCE($16, color_preference),
                notes = COALESCE($17, notes),
                contact_history = COALESCE($18, contact_history),
                last_contacted_at = COALESCE($19, last_contacted_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistRequest>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(&input.client_name)
            .bind(&input.phone)
            .bind(input.sms_consent)
            .bind(input.status)
            .bind(input.priority)
            .bind(&input.brand_preference)
            .bind(&input.model_preference)
            .bind(input.year_min)
            .bind(input.year_max)
            .bind(input.fuel_preference)
            .bind(input.transmission_preference)
            .bind(input.max_mileage)
            .bind(input.max_budget)
            .bind(&input.color_preference)
            .bind(&input.notes)
            .bind(&input.contact_history)
            .bind(last_contacted_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a waitlist request by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM waitlist_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
