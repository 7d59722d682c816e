//! Cluster snapshot sources
//!
//! A snapshot is the trio of responses one polling cycle consumes. The
//! file-backed source reads them from a directory of JSON files, which is
//! what the CLI and test fixtures use.

use crate::models::{NodeList, NodeMetricsList, PodList};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokio::fs;

/// File names a snapshot directory is expected to contain.
pub const NODES_FILE: &str = "nodes.json";
pub const NODE_METRICS_FILE: &str = "node-metrics.json";
pub const PODS_FILE: &str = "pods.json";

/// One polling cycle's worth of cluster responses.
#[derive(Debug, Clone, Default)]
pub struct ClusterSnapshot {
    pub nodes: NodeList,
    pub node_metrics: NodeMetricsList,
    pub pods: PodList,
}

/// Trait for snapshot loading implementations
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load one complete snapshot.
    async fn load(&self) -> Result<ClusterSnapshot>;
}

/// Loads snapshots from a directory of JSON files.
pub struct FileSnapshotSource {
    dir: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.dir.join(filename);
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn load(&self) -> Result<ClusterSnapshot> {
        Ok(ClusterSnapshot {
            nodes: self.read_json(NODES_FILE).await?,
            node_metrics: self.read_json(NODE_METRICS_FILE).await?,
            pods: self.read_json(PODS_FILE).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_snapshot(dir: &TempDir) {
        fs::write(
            dir.path().join(NODES_FILE),
            r#"{ "items": [ { "metadata": { "name": "n1" },
                 "status": { "allocatable": { "cpu": "2", "memory": "8Gi" },
                             "conditions": [ { "type": "Ready", "status": "True" } ] } } ] }"#,
        )
        .await
        .unwrap();
        fs::write(
            dir.path().join(NODE_METRICS_FILE),
            r#"{ "items": [ { "metadata": { "name": "n1" },
                 "usage": { "cpu": "500m", "memory": "1Gi" } } ] }"#,
        )
        .await
        .unwrap();
        fs::write(
            dir.path().join(PODS_FILE),
            r#"{ "items": [ { "metadata": { "name": "web" },
                 "status": { "phase": "Running" } } ] }"#,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_load_complete_snapshot() {
        let dir = TempDir::new().unwrap();
        write_snapshot(&dir).await;

        let source = FileSnapshotSource::new(dir.path());
        let snapshot = source.load().await.unwrap();

        assert_eq!(snapshot.nodes.items.len(), 1);
        assert_eq!(snapshot.node_metrics.items.len(), 1);
        assert_eq!(snapshot.pods.items.len(), 1);
        assert_eq!(snapshot.nodes.items[0].metadata.name.as_deref(), Some("n1"));
    }

    #[tokio::test]
    async fn test_missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        // only nodes.json present
        fs::write(dir.path().join(NODES_FILE), r#"{ "items": [] }"#)
            .await
            .unwrap();

        let source = FileSnapshotSource::new(dir.path());
        let err = source.load().await.unwrap_err();
        assert!(format!("{:#}", err).contains(NODE_METRICS_FILE));
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_snapshot(&dir).await;
        fs::write(dir.path().join(PODS_FILE), "not json").await.unwrap();

        let source = FileSnapshotSource::new(dir.path());
        let err = source.load().await.unwrap_err();
        assert!(format!("{:#}", err).contains(PODS_FILE));
    }
}
