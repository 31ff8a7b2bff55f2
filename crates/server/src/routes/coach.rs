// crates/server/src/routes/coach.rs
//! AI coach API routes.
//!
//! - GET  /coach/summary — the statistics block the coach sees
//! - POST /coach         — ask the coach; the summary is rebuilt server-side
//!
//! The summary is always computed from stored rows, never accepted from the
//! client.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use fokus_core::{
    aggregate_sessions, build_coach_prompt, format_stats_summary, llm::LlmError, rank_conditions,
    ConditionStat, SessionAggregate, COACH_TOP_K, DEFAULT_QUESTION,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    metrics::{record_coach_call, record_request},
    state::AppState,
};

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for POST /api/coach.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Response for GET /api/coach/summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(Deserialize))]
pub struct CoachSummaryResponse {
    pub aggregate: SessionAggregate,
    pub top_conditions: Vec<ConditionStat>,
    pub summary: String,
}

/// Response for POST /api/coach.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(Deserialize))]
pub struct CoachResponse {
    pub answer: String,
    pub summary: String,
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/coach", post(ask_coach))
        .route("/coach/summary", get(coach_summary))
}

// ============================================================================
// Handlers
// ============================================================================

async fn build_summary(state: &AppState, user: &AuthUser) -> ApiResult<CoachSummaryResponse> {
    let sessions = state.db.session_records(&user.user_id).await?;
    let experiments = state.db.experiment_records(&user.user_id).await?;
    let runs = state.db.run_records(&user.user_id).await?;

    let aggregate = aggregate_sessions(&sessions);
    let top_conditions = rank_conditions(&experiments, &runs, COACH_TOP_K);
    let summary = format_stats_summary(&aggregate, &top_conditions);

    Ok(CoachSummaryResponse {
        aggregate,
        top_conditions,
        summary,
    })
}

/// Metric outcome label and the HTTP status the result maps to.
fn outcome_label(result: &Result<String, LlmError>) -> (&'static str, &'static str) {
    match result {
        Ok(_) => ("ok", "200"),
        Err(LlmError::ServiceUnavailable(_)) => ("unavailable", "502"),
        Err(LlmError::Unauthorized(_)) => ("unauthorized", "500"),
        Err(LlmError::InvalidInput(_)) => ("invalid_input", "400"),
    }
}

/// GET /api/coach/summary
async fn coach_summary(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<CoachSummaryResponse>> {
    Ok(Json(build_summary(&state, &user).await?))
}

/// Resolve the question to send: absent means the default, blank is rejected.
fn resolve_question(question: Option<&str>) -> ApiResult<&str> {
    match question.map(str::trim) {
        None => Ok(DEFAULT_QUESTION),
        Some("") => Err(ApiError::BadRequest("question must not be empty".into())),
        Some(q) => Ok(q),
    }
}

/// POST /api/coach
///
/// A missing body or missing question falls back to the default question.
async fn ask_coach(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    payload: Result<Json<CoachRequest>, JsonRejection>,
) -> ApiResult<Json<CoachResponse>> {
    let request_start = Instant::now();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => CoachRequest::default(),
        Err(rejection) => {
            record_request("coach", "400", request_start.elapsed());
            return Err(rejection.into());
        }
    };
    let question = match resolve_question(request.question.as_deref()) {
        Ok(q) => q,
        Err(e) => {
            record_request("coach", "400", request_start.elapsed());
            return Err(e);
        }
    };

    let summary = match build_summary(&state, &user).await {
        Ok(built) => built.summary,
        Err(e) => {
            record_request("coach", "500", request_start.elapsed());
            return Err(e);
        }
    };
    let prompt = build_coach_prompt(&summary, question);

    let llm_start = Instant::now();
    let result = state.llm.complete(&prompt).await;
    let (outcome, status) = outcome_label(&result);
    record_coach_call(outcome, llm_start.elapsed());

    match &result {
        Ok(answer) => tracing::info!(
            user_id = %user.user_id,
            provider = state.llm.name(),
            model = state.llm.model(),
            answer_chars = answer.len(),
            "coach answered"
        ),
        Err(e) => tracing::warn!(
            user_id = %user.user_id,
            provider = state.llm.name(),
            error = %e,
            "coach call failed"
        ),
    }
    record_request("coach", status, request_start.elapsed());

    Ok(Json(CoachResponse {
        answer: result?,
        summary,
    }))
}

// ============================================================================
// Tests
// ============================================================================
