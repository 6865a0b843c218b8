//! Daily statistics snapshot model and DTOs.
//!
//! Rows are produced by an external analytics process; the HTTP surface
//! only reads them. Create/update exist for that process and for seeding.

use motordesk_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `daily_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub id: Id,
    pub date: Timestamp,
    pub total_emails: i32,
    pub ai_responses: i32,
    pub human_escalations: i32,
    pub avg_response_time_minutes: Option<i32>,
    pub total_calls: i32,
    pub ai_handled_calls: i32,
    pub transferred_calls: i32,
    pub avg_call_duration_seconds: Option<i32>,
    pub waitlist_conversions: i32,
}

/// DTO for inserting a daily snapshot. Counters default to 0.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyStats {
    pub date: Timestamp,
    #[validate(range(min = 0))]
    pub total_emails: Option<i32>,
    #[validate(range(min = 0))]
    pub ai_responses: Option<i32>,
    #[validate(range(min = 0))]
    pub human_escalations: Option<i32>,
    #[validate(range(min = 0))]
    pub avg_response_time_minutes: Option<i32>,
    #[validate(range(min = 0))]
    pub total_calls: Option<i32>,
    #[validate(range(min = 0))]
    pub ai_handled_calls: Option<i32>,
    #[validate(range(min = 0))]
    pub transferred_calls: Option<i32>,
    #[validate(range(min = 0))]
    pub avg_call_duration_seconds: Option<i32>,
    #[validate(range(min = 0))]
    pub waitlist_conversions: Option<i32>,
}

/// DTO for partially updating a daily snapshot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyStats {
    pub date: Option<Timestamp>,
    pub total_emails: Option<i32>,
    pub ai_responses: Option<i32>,
    pub human_escalations: Option<i32>,
    pub avg_response_time_minutes: Option<i32>,
    pub total_calls: Option<i32>,
    pub ai_handled_calls: Option<i32>,
    pub transferred_calls: Option<i32>,
    pub avg_call_duration_seconds: Option<i32>,
    pub waitlist_conversions: Option<i32>,
}
