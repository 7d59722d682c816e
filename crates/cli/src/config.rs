//! CLI configuration

use anyhow::Result;
use serde::Deserialize;

/// Snapshot polling configuration, read from `INSIGHTS_`-prefixed
/// environment variables. Command-line flags take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Directory holding the snapshot JSON files
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,

    /// Polling interval in seconds
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

fn default_snapshot_dir() -> String {
    "./snapshots".to_string()
}

fn default_interval() -> u64 {
    10
}

impl WatchConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("INSIGHTS"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| WatchConfig {
            snapshot_dir: default_snapshot_dir(),
            interval_secs: default_interval(),
        }))
    }
}
