//! Parsing and aggregation over Kubernetes API responses
//!
//! This module turns decoded NodeList, NodeMetricsList, and PodList
//! payloads into the numbers charts consume: per-node utilization
//! percentages, node readiness counts, pod phase counts, and per-container
//! resource figures.
//!
//! Failure policy is two-tier. Quantity decoding fails fast; the
//! [`ClusterAggregator::parse_cpu`] / [`ClusterAggregator::parse_memory`]
//! wrappers are the single place those failures are converted into a
//! telemetry event plus a `0.0` data point, so one malformed quantity
//! degrades one value instead of aborting a chart. Structural problems —
//! a metrics response matching none of the listed nodes — stay hard errors,
//! because the whole response is unusable.

mod nodes;
mod pods;
mod stats;


pub use nodes::NodeCounts;
pub use stats::{aggregate, aggregate_avg, aggregate_max, aggregate_min, aggregate_percentile};

use crate::models::ResourceKind;
use crate::observability::{Severity, Telemetry};
use crate::quantity::parse_quantity;
use std::sync::Arc;
use thiserror::Error;

/// Structural aggregation failures. These indicate an unusable response,
/// not a single bad field, and are never silently converted to zeros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("no metrics matched any node in the node list")]
    NoMatchingNodeMetrics,
}

/// Aggregates Kubernetes API responses into chart-ready numbers.
///
/// Stateless apart from the injected telemetry sink; safe to share and to
/// call concurrently.
pub struct ClusterAggregator {
    telemetry: Arc<dyn Telemetry>,
}

impl ClusterAggregator {
    pub fn new(telemetry: Arc<dyn Telemetry>) -> Self {
        Self { telemetry }
    }

    /// Decode a CPU quantity, degrading to zero on failure.
    pub fn parse_cpu(&self, raw: &str) -> f64 {
        self.parse_or_zero(raw, "cpu")
    }

    /// Decode a memory quantity, degrading to zero on failure.
    pub fn parse_memory(&self, raw: &str) -> f64 {
        self.parse_or_zero(raw, "memory")
    }

    pub(crate) fn parse_resource(&self, raw: &str, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Cpu => self.parse_cpu(raw),
            ResourceKind::Memory => self.parse_memory(raw),
        }
    }

    fn parse_or_zero(&self, raw: &str, kind: &str) -> f64 {
        match parse_quantity(raw) {
            Ok(value) => value,
            Err(err) => {
                self.telemetry.log_exception(
                    &format!("failed to decode {} quantity {:?}: {}", kind, raw, err),
                    "ClusterAggregator",
                    Severity::Warning,
                );
                0.0
            }
        }
    }
}
