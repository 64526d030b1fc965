//! Command execution
//!
//! Drives the feed controller the way a rendering layer would: subscribe
//! to the state, issue commands, and re-render (print) from each
//! published resting state.

use super::commands::{Cli, Commands};
use crate::config::FeedConfig;
use crate::error::{Error, Result, ResultExt};
use crate::feed::{ControllerConfig, FeedController, FeedState};
use crate::source::{HttpPageSource, PageSource};
use crate::types::PageRequest;
use std::sync::Arc;
use tokio::sync::watch;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        let config = FeedConfig::from_yaml_file(&self.cli.config)
            .with_context(|| format!("failed to load config {}", self.cli.config.display()))?;

        match self.cli.command {
            Commands::Check => check(&config).await,
            Commands::Trending { pages } => trending(&config, pages).await,
        }
    }
}

/// Probe the API with a single-item fetch
async fn check(config: &FeedConfig) -> Result<()> {
    let source = HttpPageSource::new(config)?;
    let items = source.fetch_page(PageRequest::new(1, 0)).await?;
    println!(
        "Connection OK: {} returned {} item(s)",
        config.base_url,
        items.len()
    );
    Ok(())
}

/// Load up to `pages` trending pages and print captioned rows
async fn trending(config: &FeedConfig, pages: u32) -> Result<()> {
    let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(config)?);
    let controller = FeedController::new(source, ControllerConfig::from(config));
    let mut states = controller.subscribe();

    controller.load_initial();

    let mut shown = 0;
    for page in 0..pages.max(1) {
        if page > 0 {
            controller.load_more();
        }

        let state = next_resting(&mut states).await?;
        let items = state.items().unwrap_or_default();

        let total = items.len();
        for item in &items[shown..] {
            println!(
                "{:>4} of {}  {} ({}x{})",
                controller.index_of(&item.id),
                total,
                item.image_url,
                item.width,
                item.height
            );
        }

        // An exhausted feed drops further load_more() calls without
        // publishing, so stop here rather than wait on a state change
        // that will never come.
        if total == shown {
            println!("No more results.");
            break;
        }
        shown = total;
    }

    Ok(())
}

/// Wait for the next resting state, skipping `Loading`/`Paginating`.
///
/// An `Error` state becomes a command failure; there is nothing for a
/// one-shot CLI to retry.
async fn next_resting(rx: &mut watch::Receiver<FeedState>) -> Result<FeedState> {
    loop {
        rx.changed()
            .await
            .map_err(|_| Error::Other("feed controller stopped".to_string()))?;

        let state = rx.borrow_and_update().clone();
        match state {
            FeedState::Success(_) => return Ok(state),
            FeedState::Error(message) => return Err(Error::Other(message)),
            FeedState::Loading | FeedState::Paginating(_) => {}
        }
    }
}
