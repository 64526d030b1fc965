//! Feed controller module
//!
//! The pagination/state-management core: coordinates fetches against a
//! [`PageSource`](crate::source::PageSource), keeps an in-memory page
//! cache, and publishes a single authoritative [`FeedState`] that a
//! rendering layer observes.
//!
//! # Overview
//!
//! - `FeedState` - closed sum type of the feed's observable states
//! - `PageCache` - in-memory cache of fetched pages, keyed by page index
//! - `FeedController` - handle for issuing commands and observing state
//!
//! All state mutation happens on a single worker task; commands arriving
//! while a fetch is in flight are dropped, so at most one network call is
//! ever outstanding.

mod controller;
mod state;

pub use controller::{ControllerConfig, FeedController};
pub use state::{FeedState, PageCache};
