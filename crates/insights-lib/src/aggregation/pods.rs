//! Pod-level aggregation: phase counts and per-container resources

use super::ClusterAggregator;
use crate::models::{Pod, PodList, PodMetrics, ResourceClaim, ResourceKind};
use std::collections::HashMap;

impl ClusterAggregator {
    /// Count pods per lower-cased phase, plus a total under `total_key`.
    ///
    /// Every requested phase key starts at zero; phases outside the
    /// requested set are ignored. The total is written last and wins over
    /// a same-named phase bucket.
    pub fn pod_counts(
        &self,
        pods: &PodList,
        total_key: &str,
        phase_keys: &[&str],
    ) -> HashMap<String, u64> {
        let mut counts: HashMap<String, u64> =
            phase_keys.iter().map(|key| (key.to_string(), 0)).collect();

        for pod in &pods.items {
            if let Some(phase) = pod.status.as_ref().and_then(|status| status.phase.as_ref()) {
                if let Some(bucket) = counts.get_mut(&phase.to_lowercase()) {
                    *bucket += 1;
                }
            }
        }

        counts.insert(total_key.to_string(), pods.items.len() as u64);
        counts
    }

    /// Per-container limit or request values for one pod.
    ///
    /// A pod without a spec or without containers yields a single default
    /// `0.0`; a container missing the requested field contributes `0.0`.
    pub fn pod_limits_or_requests(
        &self,
        pod: &Pod,
        claim: ResourceClaim,
        kind: ResourceKind,
    ) -> Vec<f64> {
        let containers = match pod.spec.as_ref() {
            Some(spec) if !spec.containers.is_empty() => &spec.containers,
            _ => return vec![0.0],
        };

        containers
            .iter()
            .map(|container| {
                container
                    .resources
                    .as_ref()
                    .and_then(|resources| resources.claim(claim))
                    .and_then(|quantities| quantities.get(kind))
                    .map(|raw| self.parse_resource(raw, kind))
                    .unwrap_or(0.0)
            })
            .collect()
    }

    /// Per-container usage values from a pod metrics payload.
    pub fn pod_usage(&self, metrics: &PodMetrics, kind: ResourceKind) -> Vec<f64> {
        metrics
            .containers
            .iter()
            .map(|container| {
                container
                    .usage
                    .as_ref()
                    .and_then(|quantities| quantities.get(kind))
                    .map(|raw| self.parse_resource(raw, kind))
                    .unwrap_or(0.0)
            })
            .collect()
    }
}
