//! Waitlist request model and DTOs.
//!
//! A waitlist request is a customer's standing ask to be matched against
//! future inventory. Vehicle-preference fields are all optional; matching
//! against stock is done by the sales team (or the external assistant),
//! not by this layer.

use motordesk_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::enums::{FuelType, Priority, Transmission, WaitlistStatus};

/// A row from the `waitlist_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    pub id: Id,
    pub client_id: Option<Id>,
    pub client_name: String,
    pub phone: String,
    pub sms_consent: bool,
    pub status: WaitlistStatus,
    pub priority: Priority,
    pub brand_preference: Option<String>,
    pub model_preference: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub fuel_preference: Option<FuelType>,
    pub transmission_preference: Option<Transmission>,
    pub max_mileage: Option<i32>,
    pub max_budget: Option<i32>,
    pub color_preference: Option<String>,
    pub notes: Option<String>,
    pub contact_history: Option<String>,
    pub created_at: Timestamp,
    pub last_contacted_at: Option<Timestamp>,
}

/// DTO for creating a waitlist request. `last_contacted_at` is
/// server-managed and not writable.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaitlistRequest {
    pub client_id: Option<Id>,
    #[validate(length(min = 1, message = "clientName must not be empty"))]
    pub client_name: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    pub sms_consent: Option<bool>,
    pub status: Option<WaitlistStatus>,
    pub priority: Option<Priority>,
    pub brand_preference: Option<String>,
    pub model_preference: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub fuel_preference: Option<FuelType>,
    pub transmission_preference: Option<Transmission>,
    #[validate(range(min = 0, message = "maxMileage must be non-negative"))]
    pub max_mileage: Option<i32>,
    #[validate(range(min = 0, message = "maxBudget must be non-negative"))]
    pub max_budget: Option<i32>,
    pub color_preference: Option<String>,
    pub notes: Option<String>,
    pub contact_history: Option<String>,
}

/// DTO for partially updating a waitlist request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWaitlistRequest {
    pub client_id: Option<Id>,
    pub client_name: Option<String>,
    pub phone: Option<String>,
    pub sms_consent: Option<bool>,
    pub status: Option<WaitlistStatus>,
    pub priority: Option<Priority>,
    pub brand_preference: Option<String>,
    pub model_preference: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub fuel_preference: Option<FuelType>,
    pub transmission_preference: Option<Transmission>,
    pub max_mileage: Option<i32>,
    pub max_budget: Option<i32>,
    pub color_preference: Option<String>,
    pub notes: Option<String>,
    pub contact_history: Option<String>,
}
