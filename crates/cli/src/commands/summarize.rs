//! Snapshot summarize command

use crate::config::WatchConfig;
use crate::output::{format_percent, print_heading, print_table, OutputFormat};
use anyhow::Result;
use insights_lib::aggregation::ClusterAggregator;
use insights_lib::livedata::{LiveDataProvider, UTILIZATION_SERIES};
use insights_lib::models::LiveDataPoint;
use insights_lib::observability::TracingTelemetry;
use insights_lib::snapshot::{FileSnapshotSource, SnapshotSource};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tabled::Tabled;

/// Row for one utilization series
#[derive(Tabled, Serialize)]
struct SeriesRow {
    #[tabled(rename = "Series")]
    series: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Row for one count series
#[derive(Tabled, Serialize)]
struct CountRow {
    #[tabled(rename = "Series")]
    series: String,
    #[tabled(rename = "Count")]
    count: u64,
}

/// Load a snapshot directory and print one live data point
pub async fn run(dir: Option<String>, format: OutputFormat) -> Result<()> {
    let config = WatchConfig::load()?;
    let dir = dir.unwrap_or(config.snapshot_dir);

    let source = FileSnapshotSource::new(&dir);
    let snapshot = source.load().await?;

    let provider = LiveDataProvider::new(ClusterAggregator::new(Arc::new(
        TracingTelemetry::new("cli"),
    )));
    let point = provider.build(&snapshot.nodes, &snapshot.node_metrics, &snapshot.pods);

    render(&point, format)
}

/// Print a live data point in the requested format
pub fn render(point: &LiveDataPoint, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(point)?);
        }
        OutputFormat::Table => {
            print_heading("CPU utilization");
            print_table(&utilization_rows(&point.cpu), format);
            print_heading("Memory utilization");
            print_table(&utilization_rows(&point.memory), format);
            print_heading("Nodes");
            print_table(&count_rows(&point.node_count), format);
            print_heading("Pods");
            print_table(&count_rows(&point.pod_count), format);
        }
    }
    Ok(())
}

fn utilization_rows(series: &HashMap<String, f64>) -> Vec<SeriesRow> {
    UTILIZATION_SERIES
        .iter()
        .filter_map(|id| {
            series.get(*id).map(|value| SeriesRow {
                series: id.to_string(),
                value: format_percent(*value),
            })
        })
        .collect()
}

fn count_rows(counts: &HashMap<String, u64>) -> Vec<CountRow> {
    let mut rows: Vec<CountRow> = counts
        .iter()
        .map(|(series, count)| CountRow {
            series: series.clone(),
            count: *count,
        })
        .collect();
    rows.sort_by(|a, b| a.series.cmp(&b.series));
    rows
}
