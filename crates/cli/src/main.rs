//! Container Insights CLI
//!
//! A command-line tool for decoding resource quantity strings and turning
//! cluster snapshot files into chart-ready live data points.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{parse, summarize, watch};
use tracing_subscriber::EnvFilter;

/// Container Insights CLI
#[derive(Parser)]
#[command(name = "cins")]
#[command(author, version, about = "CLI for the container insights pipeline", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, short, default_value = "table", global = true)]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a resource quantity string
    Parse {
        /// Quantity string, e.g. 1900m or 2Gi
        quantity: String,
    },

    /// Summarize a cluster snapshot into one live data point
    Summarize {
        /// Snapshot directory holding nodes.json, node-metrics.json, pods.json
        #[arg(long, env = "INSIGHTS_SNAPSHOT_DIR")]
        dir: Option<String>,
    },

    /// Poll a snapshot directory and emit a live data point per tick
    Watch {
        /// Snapshot directory holding nodes.json, node-metrics.json, pods.json
        #[arg(long, env = "INSIGHTS_SNAPSHOT_DIR")]
        dir: Option<String>,

        /// Seconds between polls
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Parse { quantity } => parse::run(&quantity, cli.format),
        Commands::Summarize { dir } => summarize::run(dir, cli.format).await,
        Commands::Watch { dir, interval_secs } => {
            watch::run(dir, interval_secs, cli.format).await
        }
    }
}
