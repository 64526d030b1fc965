//! Feed state and page cache

use crate::error::Error;
use crate::types::GridItem;
use std::collections::HashMap;

/// Error message used when a failure carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error";

// ============================================================================
// Feed State
// ============================================================================

/// The feed's single authoritative state.
///
/// Exactly one variant is active at any time. `Success` and `Paginating`
/// carry the accumulated item list in insertion order (page order,
/// within-page order preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Initial fetch in flight, no items yet
    Loading,
    /// All items accumulated so far; the base resting state
    Success(Vec<GridItem>),
    /// A next-page fetch in flight; items are the prior accumulation
    Paginating(Vec<GridItem>),
    /// Last operation failed; human-readable message
    Error(String),
}

impl FeedState {
    /// The visible accumulated items, if the state carries any
    pub fn items(&self) -> Option<&[GridItem]> {
        match self {
            Self::Success(items) | Self::Paginating(items) => Some(items),
            Self::Loading | Self::Error(_) => None,
        }
    }

    /// Check for the `Success` variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check for the `Paginating` variant
    pub fn is_paginating(&self) -> bool {
        matches!(self, Self::Paginating(_))
    }

    /// Build an `Error` state from a fetch failure.
    ///
    /// Falls back to [`UNKNOWN_ERROR`] when the failure description is
    /// empty.
    pub fn from_failure(err: &Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Error(UNKNOWN_ERROR.to_string())
        } else {
            Self::Error(message)
        }
    }

    /// 1-based position of the first item with the given id in the
    /// visible accumulated list, or 0 when absent.
    ///
    /// The 0 sentinel matches the 1-based "N of total" display numbering.
    pub fn index_of(&self, id: &str) -> usize {
        self.items()
            .and_then(|items| items.iter().position(|item| item.id == id))
            .map_or(0, |position| position + 1)
    }
}

// ============================================================================
// Page Cache
// ============================================================================

/// In-memory cache of fetched pages, keyed by zero-based page index.
///
/// Entries are treated as immutable once stored; only page 0 is ever
/// overwritten, by a fresh initial load. The cache lives and dies with
/// the controller, never persisted.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: HashMap<u32, Vec<GridItem>>,
}

impl PageCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached page
    pub fn get(&self, page_index: u32) -> Option<&[GridItem]> {
        self.pages.get(&page_index).map(Vec::as_slice)
    }

    /// Check whether a page is cached
    pub fn contains(&self, page_index: u32) -> bool {
        self.pages.contains_key(&page_index)
    }

    /// Store a page
    pub fn insert(&mut self, page_index: u32, items: Vec<GridItem>) {
        self.pages.insert(page_index, items);
    }

    /// Number of cached pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
