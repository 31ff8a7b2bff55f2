//! API route handlers for the FOKUS server.

pub mod coach;
pub mod dashboard;
pub mod experiments;
pub mod health;
pub mod insights;
pub mod metrics;
pub mod profile;
pub mod sessions;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check (no token required)
/// - GET  /api/profile - Stored profile or defaults
/// - PUT  /api/profile - Save profile
/// - POST /api/sessions - Record a finished focus session
/// - GET  /api/sessions - List sessions, newest first
/// - GET  /api/dashboard - Totals and the five most recent sessions
/// - POST /api/experiments - Create an experiment
/// - GET  /api/experiments - Experiments with runs and per-condition breakdown
/// - POST /api/experiments/{id}/runs - Log a run
/// - GET  /api/insights - Aggregate, 14-day chart, top conditions
/// - GET  /api/coach/summary - Statistics summary fed to the coach
/// - POST /api/coach - Ask the coach
/// - GET  /metrics - Prometheus metrics
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", profile::router())
        .nest("/api", sessions::router())
        .nest("/api", dashboard::router())
        .nest("/api", experiments::router())
        .nest("/api", insights::router())
        .nest("/api", coach::router())
        .merge(metrics::router())
        .with_state(state)
}
