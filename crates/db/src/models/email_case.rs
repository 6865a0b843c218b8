//! Email case model and DTOs.
//!
//! An email case is an inbound customer email tracked through the
//! new → in_progress → replied / follow_up lifecycle. References to the
//! client, assignee and vehicle are weak: the ids are stored as-is and
//! looked up on demand, absence tolerated.

use motordesk_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::enums::{EmailStatus, Priority};

/// A row from the `email_cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCase {
    pub id: Id,
    pub client_id: Option<Id>,
    pub subject: String,
    pub content: String,
    pub sender_email: String,
    pub sender_name: Option<String>,
    pub attachments: Option<Vec<String>>,
    pub status: EmailStatus,
    pub priority: Priority,
    pub ai_reason: Option<String>,
    pub needs_human: bool,
    pub assigned_to: Option<Id>,
    pub vehicle_id: Option<Id>,
    pub internal_notes: Option<String>,
    pub draft_response: Option<String>,
    pub received_at: Timestamp,
    pub replied_at: Option<Timestamp>,
}

/// DTO for creating an email case. `received_at` and `replied_at` are
/// server-managed and not writable.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailCase {
    pub client_id: Option<Id>,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,
    pub content: String,
    #[validate(email(message = "senderEmail must be a valid address"))]
    pub sender_email: String,
    pub sender_name: Option<String>,
    pub attachments: Option<Vec<String>>,
    pub status: Option<EmailStatus>,
    pub priority: Option<Priority>,
    pub ai_reason: Option<String>,
    pub needs_human: Option<bool>,
    pub assigned_to: Option<Id>,
    pub vehicle_id: Option<Id>,
    pub internal_notes: Option<String>,
    pub draft_response: Option<String>,
}

/// DTO for partially updating an email case.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailCase {
    pub client_id: Option<Id>,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub sender_email: Option<String>,
    pub sender_name: Option<String>,
    pub attachments: Option<Vec<String>>,
    pub status: Option<EmailStatus>,
    pub priority: Option<Priority>,
    pub ai_reason: Option<String>,
    pub needs_human: Option<bool>,
    pub assigned_to: Option<Id>,
    pub vehicle_id: Option<Id>,
    pub internal_notes: Option<String>,
    pub draft_response: Option<String>,
}

/// Typed filters for listing email cases. All filters combine with AND;
/// `None` leaves the dimension unconstrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailCaseFilter {
    pub status: Option<EmailStatus>,
    pub priority: Option<Priority>,
    pub needs_human: Option<bool>,
}
