// crates/server/src/lib.rs
//! FOKUS server library.
//!
//! Axum HTTP server exposing the focus tracker API: profiles, focus
//! sessions, experiments, insights and the AI coach.

pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;

pub use auth::{AuthKeys, AuthUser, Claims};
pub use config::{Cli, Command};
pub use error::*;
pub use metrics::{init_metrics, record_coach_call, record_request, render_metrics};
pub use routes::api_routes;
pub use state::AppState;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes under `/api` and the `/metrics` endpoint
/// - Static frontend files when `static_dir` is given, with `index.html`
///   as the fallback for client-side routes
/// - CORS (allows any origin) and request tracing
pub fn create_app(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = api_routes(state);
    if let Some(dir) = static_dir {
        tracing::info!(static_dir = %dir.display(), "Serving static files");
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}


// ============================================================================
// Integration Tests
// ============================================================================
