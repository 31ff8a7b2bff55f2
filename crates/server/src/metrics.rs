//! Application metrics for Prometheus monitoring.
//!
//! This module provides:
//! - Prometheus metrics recorder initialization
//! - Metric definitions
//! - Helper functions for recording request and coach outcomes

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// This should be called once at application startup, before any metrics are recorded.
/// Returns `true` if initialization succeeded, `false` if already initialized.
pub fn init_metrics() -> bool {
    if PROMETHEUS_HANDLE.get().is_some() {
        return false;
    }

    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    if metrics::set_global_recorder(recorder).is_err() {
        tracing::warn!("Failed to set global metrics recorder (already set)");
        return false;
    }

    if PROMETHEUS_HANDLE.set(handle).is_err() {
        tracing::warn!("Failed to store Prometheus handle (already set)");
    }

    describe_metrics();

    tracing::info!("Prometheus metrics initialized");
    true
}

fn describe_metrics() {
    describe_counter!("fokus_requests_total", "Total number of API requests by endpoint");
    describe_histogram!(
        "fokus_request_duration_seconds",
        "Duration of API requests in seconds"
    );
    describe_counter!("fokus_coach_calls_total", "Coach inference calls by outcome");
    describe_histogram!(
        "fokus_coach_latency_seconds",
        "Latency of coach inference calls in seconds"
    );
    describe_gauge!("fokus_uptime_seconds", "Seconds since the server started");
}

/// Render current metrics in Prometheus text format.
///
/// Returns `None` if metrics are not initialized.
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|h| h.render())
}

/// Record a completed API request.
///
/// # Arguments
/// * `endpoint` - The API endpoint name (e.g., "insights", "sessions")
/// * `status` - HTTP status code as string (e.g., "200", "404", "500")
/// * `duration` - Request duration
pub fn record_request(endpoint: &str, status: &str, duration: Duration) {
    counter!("fokus_requests_total", "endpoint" => endpoint.to_string(), "status" => status.to_string())
        .increment(1);
    histogram!("fokus_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(duration.as_secs_f64());
}

/// Record one coach inference call.
///
/// `outcome` is `"ok"` or the error kind (`"unavailable"`, `"unauthorized"`,
/// `"invalid_input"`).
pub fn record_coach_call(outcome: &str, duration: Duration) {
    counter!("fokus_coach_calls_total", "outcome" => outcome.to_string()).increment(1);
    histogram!("fokus_coach_latency_seconds").record(duration.as_secs_f64());
}

/// Set the uptime gauge. Refreshed on each scrape.
pub fn set_uptime(secs: u64) {
    gauge!("fokus_uptime_seconds").set(secs as f64);
}
