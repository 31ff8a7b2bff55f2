// crates/server/src/routes/sessions.rs
//! Focus session API routes.
//!
//! - POST /sessions — record a finished session
//! - GET  /sessions — all sessions, newest first

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use fokus_db::{FocusSession, NewSession};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    state::AppState,
};

const MIN_PLANNED_MINUTES: i64 = 15;
const MAX_PLANNED_MINUTES: i64 = 120;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /api/sessions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub goal: String,
    pub planned_duration_minutes: i64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    #[serde(default)]
    pub distractions_count: Option<i64>,
    #[serde(default)]
    pub self_rating: Option<i64>,
    #[serde(default)]
    pub environment_used: Option<String>,
}

/// Whole minutes between start and end, rounded to nearest.
fn actual_minutes(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> i64 {
    let secs = (ended_at - started_at).num_seconds() as f64;
    (secs / 60.0).round() as i64
}

impl CreateSessionRequest {
    fn into_new_session(self) -> ApiResult<NewSession> {
        let goal = self.goal.trim();
        if goal.is_empty() {
            return Err(ApiError::BadRequest("goal must not be empty".into()));
        }
        if !(MIN_PLANNED_MINUTES..=MAX_PLANNED_MINUTES).contains(&self.planned_duration_minutes) {
            return Err(ApiError::BadRequest(format!(
                "plannedDurationMinutes must be between {MIN_PLANNED_MINUTES} and {MAX_PLANNED_MINUTES}"
            )));
        }
        if self.ended_at < self.started_at {
            return Err(ApiError::BadRequest("endedAt is before startedAt".into()));
        }
        if self.distractions_count.is_some_and(|d| d < 0) {
            return Err(ApiError::BadRequest("distractionsCount must not be negative".into()));
        }
        if self.self_rating.is_some_and(|r| !(1..=10).contains(&r)) {
            return Err(ApiError::BadRequest("selfRating must be between 1 and 10".into()));
        }

        Ok(NewSession {
            goal: goal.to_string(),
            planned_duration_minutes: self.planned_duration_minutes,
            actual_duration_minutes: Some(actual_minutes(self.started_at, self.ended_at)),
            distractions_count: self.distractions_count,
            self_rating: self.self_rating,
            environment_used: self
                .environment_used
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            created_at: self.ended_at,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/sessions", get(list_sessions).post(create_session))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/sessions
async fn create_session(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FocusSession>)> {
    let Json(request) = payload?;
    let session = request.into_new_session()?;
    let stored = state.db.insert_session(&user.user_id, &session).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/sessions
async fn list_sessions(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<FocusSession>>> {
    Ok(Json(state.db.list_sessions(&user.user_id).await?))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bearer, do_request, test_state, StubProvider};
    use axum::http::Method;
    use chrono::TimeZone;
    use serde_json::json;

    fn app(state: Arc<AppState>) -> Router {
        Router::new().nest("/api", router()).with_state(state)
    }

    fn body(goal: &str, planned: i64, start: &str, end: &str) -> serde_json::Value {
        json!({
            "goal": goal,
            "plannedDurationMinutes": planned,
            "startedAt": start,
            "endedAt": end,
            "distractionsCount": 1,
            "selfRating": 8,
            "environmentUsed": "blue_silence"
        })
    }

    #[test]
    fn test_actual_minutes_rounds_to_nearest() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
        assert_eq!(actual_minutes(start, start + chrono::Duration::seconds(50 * 60 + 29)), 50);
        assert_eq!(actual_minutes(start, start + chrono::Duration::seconds(50 * 60 + 30)), 51);
        assert_eq!(actual_minutes(start, start), 0);
    }

    #[tokio::test]
    async fn test_create_computes_actual_minutes() {
        let state = test_state(StubProvider::answering("x")).await;
        let auth = bearer(&state, "u1", None);

        let (status, session) = do_request(
            app(state),
            Method::POST,
            "/api/sessions",
            Some(&auth),
            Some(body("  Ship the draft ", 50, "2026-03-10T08:00:00Z", "2026-03-10T08:45:10Z")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(session["goal"], "Ship the draft");
        assert_eq!(session["actualDurationMinutes"], 45);
        assert_eq!(session["createdAt"], "2026-03-10T08:45:10Z");
        assert_eq!(session["environmentUsed"], "blue_silence");
    }

    #[tokio::test]
    async fn test_create_validation_failures() {
        let state = test_state(StubProvider::answering("x")).await;
        let auth = bearer(&state, "u1", None);

        let cases = vec![
            body("   ", 50, "2026-03-10T08:00:00Z", "2026-03-10T08:50:00Z"),
            body("goal", 10, "2026-03-10T08:00:00Z", "2026-03-10T08:50:00Z"),
            body("goal", 121, "2026-03-10T08:00:00Z", "2026-03-10T08:50:00Z"),
            body("goal", 50, "2026-03-10T09:00:00Z", "2026-03-10T08:50:00Z"),
            json!({ "goal": "goal", "plannedDurationMinutes": 50,
                    "startedAt": "2026-03-10T08:00:00Z", "endedAt": "2026-03-10T08:50:00Z",
                    "selfRating": 11 }),
            json!({ "goal": "missing times", "plannedDurationMinutes": 50 }),
        ];

        for case in cases {
            let (status, _) = do_request(
                app(state.clone()),
                Method::POST,
                "/api/sessions",
                Some(&auth),
                Some(case.clone()),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        }
        assert!(state.db.list_sessions("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_newest_first() {
        let state = test_state(StubProvider::answering("x")).await;
        let alice = bearer(&state, "alice", None);
        let bob = bearer(&state, "bob", None);

        for (auth, goal, end) in [
            (&alice, "first", "2026-03-10T08:50:00Z"),
            (&alice, "second", "2026-03-11T08:50:00Z"),
            (&bob, "bobs", "2026-03-12T08:50:00Z"),
        ] {
            let (status, _) = do_request(
                app(state.clone()),
                Method::POST,
                "/api/sessions",
                Some(auth),
                Some(body(goal, 50, "2026-03-10T08:00:00Z", end)),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, list) = do_request(app(state), Method::GET, "/api/sessions", Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        let goals: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["goal"].as_str().unwrap())
            .collect();
        assert_eq!(goals, vec!["second", "first"]);
    }
}
