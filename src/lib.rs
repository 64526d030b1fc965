//! # trendgrid
//!
//! Pagination controller and remote page source for a trending-image
//! feed. The core is [`FeedController`]: it coordinates network fetches
//! against a [`PageSource`], keeps an in-memory page cache, and publishes
//! a single observable [`FeedState`] for a rendering layer to consume,
//! while guaranteeing that at most one fetch is ever in flight.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trendgrid::{ControllerConfig, FeedConfig, FeedController, HttpPageSource, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FeedConfig::new("my-api-key");
//!     let source = Arc::new(HttpPageSource::new(&config)?);
//!
//!     let controller = FeedController::new(source, ControllerConfig::from(&config));
//!     let mut states = controller.subscribe();
//!
//!     controller.load_initial();
//!     states.changed().await.ok();
//!     // ... render from states.borrow(), call load_more() near the end
//!     // of the scrolled list, retry() from an error affordance.
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! renderer ──commands──▶ FeedController ──▶ worker task ──▶ PageSource
//!    ▲                                          │               (HTTP)
//!    └───────────── watch<FeedState> ◀──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types: grid items and page requests
pub mod types;

/// Feed configuration
pub mod config;

/// HTTP client
pub mod http;

/// Remote page source trait and HTTP implementation
pub mod source;

/// The pagination/state-management controller
pub mod feed;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FeedConfig;
pub use error::{Error, Result};
pub use feed::{ControllerConfig, FeedController, FeedState};
pub use source::{HttpPageSource, PageSource};
pub use types::{GridItem, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
