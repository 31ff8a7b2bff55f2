// crates/server/src/routes/dashboard.rs
//! Dashboard API route.
//!
//! - GET /dashboard — greeting name, lifetime totals, five most recent sessions

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use fokus_core::aggregate_sessions;
use fokus_db::FocusSession;
use serde::Serialize;

use crate::{
    auth::AuthUser, error::ApiResult, metrics::record_request, routes::profile::load_profile,
    state::AppState,
};

/// Number of sessions listed on the dashboard.
pub const RECENT_SESSIONS_LIMIT: i64 = 5;

/// Response for GET /api/dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct DashboardResponse {
    pub username: Option<String>,
    pub total_minutes: i64,
    pub session_count: usize,
    pub recent_sessions: Vec<FocusSession>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard))
}

async fn build_dashboard(state: &AppState, user: &AuthUser) -> ApiResult<DashboardResponse> {
    let profile = load_profile(state, user).await?;
    let aggregate = aggregate_sessions(&state.db.session_records(&user.user_id).await?);
    let recent_sessions = state
        .db
        .recent_sessions(&user.user_id, RECENT_SESSIONS_LIMIT)
        .await?;

    Ok(DashboardResponse {
        username: profile.username.or_else(|| user.email_username()),
        total_minutes: aggregate.total_minutes,
        session_count: aggregate.total_sessions,
        recent_sessions,
    })
}

/// GET /api/dashboard
async fn dashboard(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let start = Instant::now();
    let result = build_dashboard(&state, &user).await;
    record_request("dashboard", if result.is_ok() { "200" } else { "500" }, start.elapsed());
    Ok(Json(result?))
}
