//! `GET /metrics`: Prometheus scrape target, mounted outside `/api`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::metrics::{render_metrics, set_uptime};
use crate::state::AppState;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render the exposition after refreshing the uptime gauge. 503 when no
/// recorder is installed.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    set_uptime(state.uptime_secs());
    let Some(output) = render_metrics() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized").into_response();
    };
    ([(header::CONTENT_TYPE, PROMETHEUS_TEXT)], output).into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(metrics_handler))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::test_support::{test_state, StubProvider};

    #[tokio::test]
    async fn test_scrape_includes_uptime_and_request_counters() {
        crate::metrics::init_metrics();
        crate::metrics::record_request("dashboard", "200", std::time::Duration::from_millis(4));

        let app = crate::create_app(test_state(StubProvider::answering("x")).await, None);
        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("fokus_uptime_seconds"));
        assert!(text.contains("endpoint=\"dashboard\""));
    }
}
