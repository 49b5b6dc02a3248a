//! Metrics collection and exposition.
//!
//! # Metrics
//! - `faucet_requests_total` (counter): requests by endpoint, status
//! - `faucet_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Labels use the matched route template, never raw addresses or amounts
//! - Exporter failure degrades to logging only; the faucet keeps serving

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exposition endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one served request.
pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    let labels = [
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];
    counter!("faucet_requests_total", &labels).increment(1);
    histogram!("faucet_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}
