// crates/server/src/routes/insights.rs
//! Insights API route.
//!
//! - GET /insights — session aggregate, daily focus chart, top conditions

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{NaiveDate, Utc};
use fokus_core::{
    aggregate_sessions, focus_by_day, rank_conditions, ConditionStat, FocusDay, SessionAggregate,
    INSIGHTS_TOP_K, INSIGHTS_WINDOW_DAYS,
};
use serde::Serialize;

use crate::{auth::AuthUser, error::ApiResult, metrics::record_request, state::AppState};

/// Response for GET /api/insights.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct InsightsResponse {
    pub aggregate: SessionAggregate,
    pub focus_by_day: Vec<FocusDay>,
    pub top_conditions: Vec<ConditionStat>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/insights", get(insights))
}

async fn build_insights(
    state: &AppState,
    user: &AuthUser,
    today: NaiveDate,
) -> ApiResult<InsightsResponse> {
    let sessions = state.db.session_records(&user.user_id).await?;
    let experiments = state.db.experiment_records(&user.user_id).await?;
    let runs = state.db.run_records(&user.user_id).await?;

    Ok(InsightsResponse {
        aggregate: aggregate_sessions(&sessions),
        focus_by_day: focus_by_day(&sessions, today, INSIGHTS_WINDOW_DAYS),
        top_conditions: rank_conditions(&experiments, &runs, INSIGHTS_TOP_K),
    })
}

/// GET /api/insights
async fn insights(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<InsightsResponse>> {
    let start = Instant::now();
    let result = build_insights(&state, &user, Utc::now().date_naive()).await;
    record_request("insights", if result.is_ok() { "200" } else { "500" }, start.elapsed());
    Ok(Json(result?))
}
