//! Prometheus metrics endpoint
//!
//! Exposes gateway metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize metrics (call once at startup)
pub fn init_metrics() -> anyhow::Result<()> {
    PROMETHEUS_HANDLE.get_or_try_init(|| PrometheusBuilder::new().install_recorder())?;

    register_metrics();
    Ok(())
}

fn register_metrics() {
    metrics::describe_counter!(
        "gateway_requests_total",
        "Total number of /complete requests by outcome"
    );
    metrics::describe_histogram!(
        "gateway_request_duration_seconds",
        "Request duration in seconds by outcome"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns an empty body when no recorder was installed.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Record a finished `/complete` request
pub fn record_request(outcome: &'static str, duration_secs: f64) {
    metrics::counter!("gateway_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "outcome" => outcome)
        .record(duration_secs);
}
