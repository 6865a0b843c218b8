//! Handlers for the read-only `/statistics` resource.

use axum::extract::State;
use axum::Json;
use motordesk_db::models::daily_stats::DailyStats;
use motordesk_db::repositories::DailyStatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/statistics
///
/// Raw daily snapshots, most recent first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DailyStats>>> {
    let stats = DailyStatsRepo::list(&state.pool).await?;
    Ok(Json(stats))
}

/// Aggregate view returned by the summary endpoint. Distinct from the
/// per-day snapshots and not derived from them yet.
#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub emails: EmailStats,
    pub calls: CallStats,
    pub waitlist: WaitlistStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailStats {
    pub total: i64,
    pub ai_responses: i64,
    pub human_escalations: i64,
    pub avg_response_time_minutes: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStats {
    pub total: i64,
    pub ai_handled: i64,
    pub transferred: i64,
    pub avg_duration_seconds: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistStats {
    pub total: i64,
    pub conversions: i64,
    pub conversion_rate: f64,
}

/// GET /api/statistics/summary
///
/// Returns placeholder aggregates until the analytics pipeline can
/// compute them from the daily snapshots.
/// TODO: aggregate from daily_stats once more than a week of data exists.
pub async fn summary() -> Json<StatsSummary> {
    Json(StatsSummary {
        emails: EmailStats {
            total: 156,
            ai_responses: 98,
            human_escalations: 58,
            avg_response_time_minutes: 135,
        },
        calls: CallStats {
            total: 234,
            ai_handled: 187,
            transferred: 47,
            avg_duration_seconds: 270,
        },
        waitlist: WaitlistStats {
            total: 120,
            conversions: 15,
            conversion_rate: 12.5,
        },
    })
}
