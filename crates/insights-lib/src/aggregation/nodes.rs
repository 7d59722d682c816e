//! Node-level aggregation: readiness counts and utilization percentages

use super::{AggregationError, ClusterAggregator};
use crate::models::{Node, NodeList, NodeMetricsList, ResourceKind};
use serde::Serialize;
use std::collections::HashMap;

/// Ready / not-ready split of a node list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeCounts {
    pub ready: u64,
    pub not_ready: u64,
}

impl ClusterAggregator {
    /// Count ready and not-ready nodes.
    ///
    /// A node is ready iff its conditions carry exactly one `Ready`
    /// condition and that condition's status is `True`. Zero or multiple
    /// `Ready` conditions, any other status, or missing status all count
    /// as not ready.
    pub fn node_counts(&self, nodes: &NodeList) -> NodeCounts {
        let mut counts = NodeCounts::default();
        for node in &nodes.items {
            if node_is_ready(node) {
                counts.ready += 1;
            } else {
                counts.not_ready += 1;
            }
        }
        counts
    }

    /// Per-node CPU utilization percentages, `100 * usage / allocatable`.
    pub fn node_cpu(
        &self,
        nodes: &NodeList,
        metrics: &NodeMetricsList,
    ) -> Result<Vec<f64>, AggregationError> {
        self.node_utilization(nodes, metrics, ResourceKind::Cpu)
    }

    /// Per-node memory utilization percentages, `100 * usage / allocatable`.
    pub fn node_memory(
        &self,
        nodes: &NodeList,
        metrics: &NodeMetricsList,
    ) -> Result<Vec<f64>, AggregationError> {
        self.node_utilization(nodes, metrics, ResourceKind::Memory)
    }

    fn node_utilization(
        &self,
        nodes: &NodeList,
        metrics: &NodeMetricsList,
        kind: ResourceKind,
    ) -> Result<Vec<f64>, AggregationError> {
        let mut allocatable: HashMap<&str, &str> = HashMap::new();
        for node in &nodes.items {
            let name = node.metadata.name.as_deref();
            let quantity = node
                .status
                .as_ref()
                .and_then(|status| status.allocatable.as_ref())
                .and_then(|resources| resources.get(kind));
            if let (Some(name), Some(quantity)) = (name, quantity) {
                allocatable.insert(name, quantity);
            }
        }

        let mut utilization = Vec::new();
        for entry in &metrics.items {
            let name = entry.metadata.name.as_deref();
            let usage = entry.usage.as_ref().and_then(|resources| resources.get(kind));
            if let (Some(name), Some(raw_usage)) = (name, usage) {
                if let Some(raw_allocatable) = allocatable.get(name) {
                    let used = self.parse_resource(raw_usage, kind);
                    let total = self.parse_resource(raw_allocatable, kind);
                    utilization.push(100.0 * used / total);
                }
            }
        }

        // Nodes without a metrics entry are skipped; a response matching
        // nothing at all means the caller handed over the wrong cluster.
        if utilization.is_empty() {
            return Err(AggregationError::NoMatchingNodeMetrics);
        }
        Ok(utilization)
    }
}

fn node_is_ready(node: &Node) -> bool {
    let conditions = match node.status.as_ref().and_then(|s| s.conditions.as_ref()) {
        Some(conditions) => conditions,
        None => return false,
    };
    let ready: Vec<_> = conditions
        .iter()
        .filter(|condition| condition.condition_type == "Ready")
        .collect();
    ready.len() == 1 && ready[0].status == "True"
}
