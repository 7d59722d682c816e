//! Data models for the live-metrics pipeline
//!
//! The Kubernetes-side models mirror the upstream API field shapes
//! (`items[].metadata.name`, `items[].status.allocatable`, and so on) and
//! deserialize leniently: absent fields become `None`/empty so that a
//! partial payload degrades instead of failing wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which resource a quantity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Cpu,
    Memory,
}

/// Which side of a container's resource declaration to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceClaim {
    Limits,
    Requests,
}

/// Object metadata subset used by the aggregation pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: Option<String>,
    pub namespace: Option<String>,
}

/// CPU and memory quantity strings, still undecoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceQuantities {
    pub cpu: Option<String>,
    pub memory: Option<String>,
}

impl ResourceQuantities {
    /// Raw quantity string for one resource kind.
    pub fn get(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Cpu => self.cpu.as_deref(),
            ResourceKind::Memory => self.memory.as_deref(),
        }
    }
}

/// One entry of a node's `status.conditions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeStatus {
    pub allocatable: Option<ResourceQuantities>,
    pub conditions: Option<Vec<NodeCondition>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub status: Option<NodeStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeList {
    #[serde(default)]
    pub items: Vec<Node>,
}

/// One entry of a `metrics.k8s.io` NodeMetricsList.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeMetrics {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub usage: Option<ResourceQuantities>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeMetricsList {
    #[serde(default)]
    pub items: Vec<NodeMetrics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRequirements {
    pub limits: Option<ResourceQuantities>,
    pub requests: Option<ResourceQuantities>,
}

impl ResourceRequirements {
    /// Quantities on the requested side of the declaration.
    pub fn claim(&self, claim: ResourceClaim) -> Option<&ResourceQuantities> {
        match claim {
            ResourceClaim::Limits => self.limits.as_ref(),
            ResourceClaim::Requests => self.requests.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub name: String,
    pub resources: Option<ResourceRequirements>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodStatus {
    pub phase: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pod {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: Option<PodSpec>,
    pub status: Option<PodStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodList {
    #[serde(default)]
    pub items: Vec<Pod>,
}

/// Per-container usage from a `metrics.k8s.io` PodMetrics payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerUsage {
    #[serde(default)]
    pub name: String,
    pub usage: Option<ResourceQuantities>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodMetrics {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub containers: Vec<ContainerUsage>,
}

/// One polling cycle's aggregated output, immutable after construction.
///
/// The four maps are keyed by aggregation/series id (`min`, `p95`,
/// `ready`, `running`, ...) and consumed as-is by chart builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveDataPoint {
    pub cpu: HashMap<String, f64>,
    pub memory: HashMap<String, f64>,
    pub node_count: HashMap<String, u64>,
    pub pod_count: HashMap<String, u64>,
    pub timestamp: DateTime<Utc>,
}
