//! Metrics for congress.gov API calls.
//!
//! Provides OpenTelemetry-based metrics for tracking request volume, failures,
//! latency, and quota headroom. The library installs no exporter; instruments
//! report to whatever meter provider the application registers globally.

use congress_error::{CongressError, CongressErrorKind};
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<ApiMetrics> = OnceLock::new();

/// Metrics for congress.gov API interactions, labeled by endpoint.
#[derive(Clone)]
pub struct ApiMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total API requests that reached the server
    pub requests: Counter<u64>,
    /// Failed API requests
    pub errors: Counter<u64>,
    /// API call duration in seconds
    pub duration: Histogram<f64>,
    /// Remaining hourly quota reported by the server
    pub rate_limit_remaining: Histogram<f64>,
}

impl ApiMetrics {
    fn init() -> Self {
        let meter = global::meter("congress_gov");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("congress.requests")
                .with_description("Total congress.gov API requests")
                .build(),
            errors: meter
                .u64_counter("congress.errors")
                .with_description("Failed congress.gov API requests")
                .build(),
            duration: meter
                .f64_histogram("congress.duration")
                .with_unit("seconds")
                .with_description("congress.gov API call duration")
                .build(),
            rate_limit_remaining: meter
                .f64_histogram("congress.rate_limit.remaining")
                .with_description("Requests left in the hourly quota")
                .build(),
        }
    }

    /// Get the global API metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a request that received a response, whatever its status.
    pub fn record_request(&self, endpoint: &str, duration_secs: f64) {
        let labels = &[KeyValue::new("endpoint", endpoint.to_string())];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, endpoint: &str, error: &CongressError) {
        let labels = &[
            KeyValue::new("endpoint", endpoint.to_string()),
            KeyValue::new("kind", classify_error(error)),
        ];
        self.errors.add(1, labels);
    }

    /// Record the remaining quota read from response headers.
    pub fn record_rate_limit(&self, remaining: i64) {
        self.rate_limit_remaining.record(remaining as f64, &[]);
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify an error for metrics labeling.
///
/// Returns one of: "rate_limit", "api", "network", "decode", "config", "sdk"
pub fn classify_error(error: &CongressError) -> &'static str {
    match error.kind() {
        CongressErrorKind::RateLimit(_) => "rate_limit",
        CongressErrorKind::Api(_) => "api",
        CongressErrorKind::Http(_) => "network",
        CongressErrorKind::Json(_) => "decode",
        CongressErrorKind::Config(_) => "config",
        CongressErrorKind::Sdk(_) => "sdk",
    }
}
