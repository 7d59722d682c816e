//! Snapshot polling command
//!
//! Rebuilds the live data point every tick. A failed load marks a session
//! boundary: the provider cache is cleared and polling continues.

use crate::commands::summarize;
use crate::config::WatchConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use insights_lib::aggregation::ClusterAggregator;
use insights_lib::livedata::LiveDataProvider;
use insights_lib::observability::{InsightsMetrics, TracingTelemetry};
use insights_lib::snapshot::{FileSnapshotSource, SnapshotSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Poll the snapshot directory until interrupted
pub async fn run(
    dir: Option<String>,
    interval_secs: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let config = WatchConfig::load()?;
    let dir = dir.unwrap_or(config.snapshot_dir);
    let interval_secs = interval_secs.unwrap_or(config.interval_secs);

    let source = FileSnapshotSource::new(&dir);
    let mut provider = LiveDataProvider::new(ClusterAggregator::new(Arc::new(
        TracingTelemetry::new("watch"),
    )));
    let metrics = InsightsMetrics::new();

    info!(dir = %dir, interval_secs, "Watching snapshot directory");

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match source.load().await {
                    Ok(snapshot) => {
                        let point =
                            provider.build(&snapshot.nodes, &snapshot.node_metrics, &snapshot.pods);
                        metrics.inc_snapshots_processed();
                        summarize::render(&point, format)?;
                    }
                    Err(err) => {
                        warn!("Snapshot load failed, clearing cache: {:#}", err);
                        provider.clear_cache();
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
