//! Repository for the `vehicles` table.

use motordesk_core::types::Id;
use sqlx::PgPool;

use crate::models::enums::VehicleStatus;
use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list for `vehicles` queries.
const COLUMNS: &str = "\
    id, reference, brand, model, year, fuel, transmission, mileage, price, \
    color, status, ai_usable, description, photos, internal_notes, created_at";

/// Provides CRUD operations for the vehicle inventory.
pub struct VehicleRepo;

impl VehicleRepo {
    /// List vehicles newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<VehicleStatus>,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles
             WHERE ($1::vehicle_status IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Find a vehicle by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new vehicle, returning the created row. Status defaults
    /// to available and the AI-usable flag to true. A duplicate reference
    /// violates `uq_vehicles_reference`.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (
                reference, brand, model, year, fuel, transmission, mileage,
                price, color, status, ai_usable, description, photos,
                internal_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                     COALESCE($10, 'available'::vehicle_status),
                     COALESCE($11, TRUE), $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.reference)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.fuel)
            .bind(input.transmission)
            .bind(input.mileage)
            .bind(input.price)
            .bind(&input.color)
            .bind(input.status)
            .bind(input.ai_usable)
            .bind(&input.description)
            .bind(&input.photos)
            .bind(&input.internal_notes)
            .fetch_one(pool)
            .await
    }

    /// Partially update a vehicle, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: Id,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                reference = COALESCE($2, reference),
                brand = COALESCE($3, brand),
                model = COALESCE($4, model),
                year = COALESCE($5, year),
                fuel = COALESCE($6, fuel),
                transmission = COALESCE($7, transmission),
                mileage = COALESCE($8, mileage),
                price = COALESCE($9, price),
                color = COALESCE($10, color),
                status = COALESCE($11, status),
                ai_usable = COALESCE($12, ai_usable),
                description = COALESCE($13, description),
                photos = COALESCE($14, photos),
                internal_notes = COALESCE($15, internal_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.reference)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.fuel)
            .bind(input.transmission)
            .bind(input.mileage)
            .bind(input.price)
            .bind(&input.color)
            .bind(input.status)
            .bind(input.ai_usable)
            .bind(&input.description)
            .bind(&input.photos)
            .bind(&input.internal_notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Id) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
