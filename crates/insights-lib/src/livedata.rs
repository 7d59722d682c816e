//! Live data point assembly
//!
//! One [`LiveDataPoint`] is built per polling cycle from the three cluster
//! responses. The provider also owns the per-pod limits/requests cache:
//! pod specs rarely change between polls, so extraction results are
//! memoized until [`LiveDataProvider::clear_cache`] marks a session
//! boundary.

use crate::aggregation::{
    aggregate_avg, aggregate_max, aggregate_min, aggregate_percentile, AggregationError,
    ClusterAggregator,
};
use crate::models::{
    LiveDataPoint, NodeList, NodeMetricsList, Pod, PodList, ResourceClaim, ResourceKind,
};
use crate::observability::InsightsMetrics;
use chrono::Utc;
use std::collections::HashMap;
use tracing::warn;

/// Series ids emitted for the cpu and memory utilization maps.
pub const UTILIZATION_SERIES: &[&str] = &["min", "max", "avg", "p50", "p90", "p95"];

/// Key the total pod count is recorded under.
pub const TOTAL_POD_KEY: &str = "all";

/// Phase buckets tracked for pod counts.
pub const POD_PHASE_KEYS: &[&str] = &["pending", "running", "succeeded", "failed", "unknown"];

/// Node count series ids.
pub const READY_KEY: &str = "ready";
pub const NOT_READY_KEY: &str = "notReady";

/// Builds live data points and owns the pod limits/requests cache.
pub struct LiveDataProvider {
    aggregator: ClusterAggregator,
    metrics: InsightsMetrics,
    limits_cache: HashMap<(String, ResourceClaim, ResourceKind), Vec<f64>>,
}

impl LiveDataProvider {
    pub fn new(aggregator: ClusterAggregator) -> Self {
        Self {
            aggregator,
            metrics: InsightsMetrics::new(),
            limits_cache: HashMap::new(),
        }
    }

    /// Assemble one cycle's data point from the three cluster responses.
    pub fn build(
        &self,
        nodes: &NodeList,
        node_metrics: &NodeMetricsList,
        pods: &PodList,
    ) -> LiveDataPoint {
        let cpu = self.utilization_series("cpu", self.aggregator.node_cpu(nodes, node_metrics));
        let memory =
            self.utilization_series("memory", self.aggregator.node_memory(nodes, node_metrics));

        let counts = self.aggregator.node_counts(nodes);
        let mut node_count = HashMap::new();
        node_count.insert(READY_KEY.to_string(), counts.ready);
        node_count.insert(NOT_READY_KEY.to_string(), counts.not_ready);

        let pod_count = self.aggregator.pod_counts(pods, TOTAL_POD_KEY, POD_PHASE_KEYS);

        LiveDataPoint {
            cpu,
            memory,
            node_count,
            pod_count,
            timestamp: Utc::now(),
        }
    }

    /// Per-container limit or request values for one pod, memoized by pod
    /// name until the next [`clear_cache`](Self::clear_cache).
    pub fn pod_limits(
        &mut self,
        pod: &Pod,
        claim: ResourceClaim,
        kind: ResourceKind,
    ) -> Vec<f64> {
        let name = pod.metadata.name.clone().unwrap_or_default();
        let key = (name, claim, kind);
        if let Some(cached) = self.limits_cache.get(&key) {
            return cached.clone();
        }

        let values = self.aggregator.pod_limits_or_requests(pod, claim, kind);
        self.limits_cache.insert(key, values.clone());
        values
    }

    /// Session boundary: forget memoized pod limits.
    pub fn clear_cache(&mut self) {
        self.limits_cache.clear();
    }

    fn utilization_series(
        &self,
        resource: &str,
        utilization: Result<Vec<f64>, AggregationError>,
    ) -> HashMap<String, f64> {
        let mut series = HashMap::new();

        let values = match utilization {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    resource = %resource,
                    error = %err,
                    "node utilization unavailable, emitting zeroed series"
                );
                self.metrics.inc_aggregation_errors();
                for id in UTILIZATION_SERIES {
                    series.insert(id.to_string(), 0.0);
                }
                return series;
            }
        };

        series.insert("min".to_string(), aggregate_min(&values));
        series.insert("max".to_string(), aggregate_max(&values));
        series.insert("avg".to_string(), aggregate_avg(&values));
        series.insert("p50".to_string(), aggregate_percentile(&values, 50.0));
        series.insert("p90".to_string(), aggregate_percentile(&values, 90.0));
        series.insert("p95".to_string(), aggregate_percentile(&values, 95.0));
        series
    }
}
