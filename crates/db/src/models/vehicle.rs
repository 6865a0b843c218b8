//! Vehicle inventory model and DTOs.

use motordesk_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::enums::{FuelType, Transmission, VehicleStatus};

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Id,
    pub reference: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub fuel: FuelType,
    pub transmission: Transmission,
    pub mileage: i32,
    pub price: i32,
    pub color: Option<String>,
    pub status: VehicleStatus,
    pub ai_usable: bool,
    pub description: Option<String>,
    pub photos: Option<Vec<String>>,
    pub internal_notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a vehicle. The reference must be unique across the
/// inventory (`uq_vehicles_reference`); a duplicate surfaces as 409.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    #[validate(length(min = 1, message = "reference must not be empty"))]
    pub reference: String,
    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100, message = "year out of range"))]
    pub year: i32,
    pub fuel: FuelType,
    pub transmission: Transmission,
    #[validate(range(min = 0, message = "mileage must be non-negative"))]
    pub mileage: i32,
    #[validate(range(min = 0, message = "price must be non-negative"))]
    pub price: i32,
    pub color: Option<String>,
    pub status: Option<VehicleStatus>,
    pub ai_usable: Option<bool>,
    pub description: Option<String>,
    pub photos: Option<Vec<String>>,
    pub internal_notes: Option<String>,
}

/// DTO for partially updating a vehicle.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub reference: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub fuel: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub mileage: Option<i32>,
    pub price: Option<i32>,
    pub color: Option<String>,
    pub status: Option<VehicleStatus>,
    pub ai_usable: Option<bool>,
    pub description: Option<String>,
    pub photos: Option<Vec<String>>,
    pub internal_notes: Option<String>,
}
