// crates/server/src/routes/experiments.rs
//! Experiment lab API routes.
//!
//! - POST /experiments            — create an experiment
//! - GET  /experiments            — experiments with their runs and breakdown
//! - POST /experiments/{id}/runs  — log a run under a condition label

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fokus_core::{condition_breakdown, ConditionBreakdown};
use fokus_db::{
    Experiment, ExperimentRun, NewExperiment, NewRun, DEFAULT_METRIC_NAME, DEFAULT_VARIABLE_NAME,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    state::AppState,
};

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for POST /api/experiments.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperimentRequest {
    pub name: String,
    #[serde(default)]
    pub variable_name: Option<String>,
    #[serde(default)]
    pub metric_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for POST /api/experiments/{id}/runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRunRequest {
    pub condition_label: String,
    #[serde(default)]
    pub minutes: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One experiment card on the lab page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(Deserialize))]
pub struct ExperimentDetail {
    #[serde(flatten)]
    pub experiment: Experiment,
    pub runs: Vec<ExperimentRun>,
    pub breakdown: Vec<ConditionBreakdown>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl CreateExperimentRequest {
    fn into_new_experiment(self) -> ApiResult<NewExperiment> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".into()));
        }
        Ok(NewExperiment {
            name: name.to_string(),
            variable_name: non_blank(self.variable_name)
                .unwrap_or_else(|| DEFAULT_VARIABLE_NAME.to_string()),
            metric_name: non_blank(self.metric_name)
                .unwrap_or_else(|| DEFAULT_METRIC_NAME.to_string()),
            description: non_blank(self.description),
        })
    }
}

impl LogRunRequest {
    /// The label is checked for blankness but stored exactly as sent.
    fn into_new_run(self) -> ApiResult<NewRun> {
        if self.condition_label.trim().is_empty() {
            return Err(ApiError::BadRequest("conditionLabel must not be empty".into()));
        }
        if self.minutes.is_some_and(|m| m < 0) {
            return Err(ApiError::BadRequest("minutes must not be negative".into()));
        }
        if self.rating.is_some_and(|r| !(1..=10).contains(&r)) {
            return Err(ApiError::BadRequest("rating must be between 1 and 10".into()));
        }
        Ok(NewRun {
            condition_label: self.condition_label,
            minutes: self.minutes,
            rating: self.rating,
            notes: non_blank(self.notes),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/experiments", get(list_experiments).post(create_experiment))
        .route("/experiments/{id}/runs", post(log_run))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/experiments
async fn create_experiment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    payload: Result<Json<CreateExperimentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Experiment>)> {
    let Json(request) = payload?;
    let experiment = request.into_new_experiment()?;
    let stored = state.db.create_experiment(&user.user_id, &experiment).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/experiments
async fn list_experiments(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Vec<ExperimentDetail>>> {
    let experiments = state.db.list_experiments(&user.user_id).await?;

    let mut runs_by_experiment: HashMap<String, Vec<ExperimentRun>> = HashMap::new();
    for run in state.db.list_runs(&user.user_id).await? {
        runs_by_experiment
            .entry(run.experiment_id.clone())
            .or_default()
            .push(run);
    }

    let details = experiments
        .into_iter()
        .map(|experiment| {
            let runs = runs_by_experiment.remove(&experiment.id).unwrap_or_default();
            let records: Vec<_> = runs.iter().map(ExperimentRun::to_record).collect();
            ExperimentDetail {
                breakdown: condition_breakdown(&records),
                experiment,
                runs,
            }
        })
        .collect();

    Ok(Json(details))
}

/// POST /api/experiments/{id}/runs
async fn log_run(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(experiment_id): Path<String>,
    payload: Result<Json<LogRunRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ExperimentRun>)> {
    let Json(request) = payload?;
    let run = request.into_new_run()?;
    let stored = state
        .db
        .log_run(&user.user_id, &experiment_id, &run)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Experiment {experiment_id}")))?;
    Ok((StatusCode::CREATED, Json(stored)))
}

// ============================================================================
// Tests
// ============================================================================
