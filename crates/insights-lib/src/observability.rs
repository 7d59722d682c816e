//! Observability infrastructure for the insights pipeline
//!
//! Provides:
//! - Prometheus counters (parse failures, aggregation errors, snapshots)
//! - A narrow telemetry interface for exception reporting, with a
//!   tracing-backed implementation

use prometheus::{register_int_counter, IntCounter};
use std::sync::OnceLock;
use tracing::{error, warn};

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<InsightsMetricsInner> = OnceLock::new();

struct InsightsMetricsInner {
    exceptions: IntCounter,
    aggregation_errors: IntCounter,
    snapshots_processed: IntCounter,
}

impl InsightsMetricsInner {
    fn new() -> Self {
        Self {
            exceptions: register_int_counter!(
                "insights_exceptions_total",
                "Total number of exceptions reported through telemetry"
            )
            .expect("Failed to register exceptions"),

            aggregation_errors: register_int_counter!(
                "insights_aggregation_errors_total",
                "Total number of aggregation passes rejected as unusable"
            )
            .expect("Failed to register aggregation_errors"),

            snapshots_processed: register_int_counter!(
                "insights_snapshots_processed_total",
                "Total number of cluster snapshots turned into live data points"
            )
            .expect("Failed to register snapshots_processed"),
        }
    }
}

/// Counter handle for the insights pipeline
///
/// Lightweight handle to the global metrics instance; clones share the
/// same underlying counters.
#[derive(Clone)]
pub struct InsightsMetrics {
    _private: (),
}

impl Default for InsightsMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightsMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(InsightsMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &InsightsMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    pub fn inc_exceptions(&self) {
        self.inner().exceptions.inc();
    }

    pub fn inc_aggregation_errors(&self) {
        self.inner().aggregation_errors.inc();
    }

    pub fn inc_snapshots_processed(&self) {
        self.inner().snapshots_processed.inc();
    }
}

/// Severity of a reported exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Verbose,
    Warning,
    Error,
    Critical,
}

/// Exception sink injected into the aggregation layer.
///
/// Kept deliberately narrow: one structured event per swallowed failure,
/// nothing else. Implementations must be safe to share across callers.
pub trait Telemetry: Send + Sync {
    fn log_exception(&self, message: &str, source: &str, severity: Severity);
}

/// Telemetry implementation routing exceptions through `tracing`.
#[derive(Clone)]
pub struct TracingTelemetry {
    component: String,
    metrics: InsightsMetrics,
}

impl TracingTelemetry {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            metrics: InsightsMetrics::new(),
        }
    }
}

impl Telemetry for TracingTelemetry {
    fn log_exception(&self, message: &str, source: &str, severity: Severity) {
        self.metrics.inc_exceptions();
        match severity {
            Severity::Error | Severity::Critical => {
                error!(
                    event = "exception",
                    component = %self.component,
                    source = %source,
                    severity = ?severity,
                    "{}",
                    message
                );
            }
            _ => {
                warn!(
                    event = "exception",
                    component = %self.component,
                    source = %source,
                    severity = ?severity,
                    "{}",
                    message
                );
            }
        }
    }
}

/// Telemetry implementation that discards everything. Useful in tests and
/// for embedders that already observe failures elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn log_exception(&self, _message: &str, _source: &str, _severity: Severity) {}
}
