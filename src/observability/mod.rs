//! Request logging and in-process metrics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Request counters for Travis API calls.
#[derive(Debug, Default)]
pub struct Metrics {
    requests_total: AtomicU64,
    requests_success: AtomicU64,
    requests_failed: AtomicU64,
    latency_total_us: AtomicU64,
    latency_count: AtomicU64,
}

impl Metrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful request.
    pub fn record_success(&self) {
        self.requests_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed request.
    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records request latency.
    pub fn record_latency(&self, duration: Duration) {
        let us = duration.as_micros() as u64;
        self.latency_total_us.fetch_add(us, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the total request count.
    pub fn total_requests(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Gets the successful request count.
    pub fn successful_requests(&self) -> u64 {
        self.requests_success.load(Ordering::Relaxed)
    }

    /// Gets the failed request count.
    pub fn failed_requests(&self) -> u64 {
        self.requests_failed.load(Ordering::Relaxed)
    }

    /// Gets the average latency in microseconds.
    pub fn average_latency_us(&self) -> u64 {
        let total = self.latency_total_us.load(Ordering::Relaxed);
        let count = self.latency_count.load(Ordering::Relaxed);
        if count == 0 {
            0
        } else {
            total / count
        }
    }

    /// Gets a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.total_requests(),
            requests_success: self.successful_requests(),
            requests_failed: self.failed_requests(),
            average_latency_us: self.average_latency_us(),
        }
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total requests.
    pub requests_total: u64,
    /// Successful requests.
    pub requests_success: u64,
    /// Failed requests.
    pub requests_failed: u64,
    /// Average latency in microseconds.
    pub average_latency_us: u64,
}

/// Measures one request and reports it to [`Metrics`] and the log.
pub(crate) struct RequestTimer {
    start: Instant,
    metrics: Arc<Metrics>,
    method: String,
    url: String,
}

impl RequestTimer {
    /// Starts timing a request.
    pub(crate) fn start(metrics: Arc<Metrics>, method: &str, url: &str) -> Self {
        metrics.record_request();
        debug!(method = %method, url = %url, "Travis API request started");
        Self {
            start: Instant::now(),
            metrics,
            method: method.to_string(),
            url: url.to_string(),
        }
    }

    /// Records a completed request with the given status.
    pub(crate) fn success(self, status: u16) {
        let elapsed = self.start.elapsed();
        self.metrics.record_success();
        self.metrics.record_latency(elapsed);
        info!(
            method = %self.method,
            url = %self.url,
            status = status,
            duration_ms = elapsed.as_millis() as u64,
            "Travis API request completed"
        );
    }

    /// Records a failed request.
    pub(crate) fn failure(self, error: &str) {
        let elapsed = self.start.elapsed();
        self.metrics.record_failure();
        self.metrics.record_latency(elapsed);
        error!(
            method = %self.method,
            url = %self.url,
            error = %error,
            duration_ms = elapsed.as_millis() as u64,
            "Travis API request failed"
        );
    }
}

/// Headers whose values must never be logged.
pub const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie"];

/// Redacts sensitive header values.
pub fn redact_header(name: &str, value: &str) -> String {
    if SENSITIVE_HEADERS.contains(&name.to_lowercase().as_str()) {
        "[REDACTED]".to_string()
    } else {
        value.to_string()
    }
}
