//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by route and status
//! - `gateway_request_duration_seconds` (histogram): latency by route
//! - `gateway_mints_total` (counter): mint outcomes
//!
//! # Design Decisions
//! - Prometheus exposition on a dedicated listener, separate from the facade
//! - Low-overhead metric updates; labels limited to route/status/outcome

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus exposition endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record a completed facade request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);

    histogram!("gateway_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record a mint outcome.
pub fn record_mint(success: bool) {
    let outcome = if success { "success" } else { "failed" };
    counter!("gateway_mints_total", "outcome" => outcome).increment(1);
}
