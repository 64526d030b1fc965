//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// trendgrid - trending-image feed client
#[derive(Parser, Debug)]
#[command(name = "trendgrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the feed config YAML file
    #[arg(short, long, global = true, default_value = "feed.yaml")]
    pub config: PathBuf,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the configured API with a single-page fetch
    Check,

    /// Load trending pages and print them
    Trending {
        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
}
