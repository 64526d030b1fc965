//! Remote page source module
//!
//! The feed controller never talks to the network directly; it is handed
//! a [`PageSource`] at construction. The production implementation,
//! [`HttpPageSource`], fetches pages from a Giphy-style trending
//! endpoint; tests substitute a scripted fake.

mod remote;
mod types;

pub use remote::HttpPageSource;
pub use types::{RawImages, RawRecord, RawRendition, TrendingResponse};

use crate::error::Result;
use crate::types::{GridItem, PageRequest};
use async_trait::async_trait;

/// Port for fetching one page of items from a remote listing.
///
/// Transport, status, and payload-parse failures all surface as a single
/// [`crate::Error`]; callers only ever see its description string.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page described by `request`, in source order.
    ///
    /// An empty list is a valid response and signals exhaustion to the
    /// controller, not an error.
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<GridItem>>;
}

#[cfg(test)]
mod tests;
