//! Core library for the container insights live-metrics pipeline
//!
//! This crate provides the functionality behind a cluster live-metrics
//! dashboard:
//! - Kubernetes resource quantity decoding
//! - Aggregation of node and pod responses into chart series
//! - Per-cycle live data point assembly with caller-owned caching
//! - Snapshot sources and observability plumbing

pub mod aggregation;
pub mod livedata;
pub mod models;
pub mod observability;
pub mod quantity;
pub mod snapshot;

pub use aggregation::{AggregationError, ClusterAggregator, NodeCounts};
pub use livedata::LiveDataProvider;
pub use models::*;
pub use observability::{InsightsMetrics, NoopTelemetry, Severity, Telemetry, TracingTelemetry};
pub use quantity::{parse_quantity, QuantityError};
pub use snapshot::{ClusterSnapshot, FileSnapshotSource, SnapshotSource};
