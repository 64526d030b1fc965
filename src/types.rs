//! Common types used throughout trendgrid
//!
//! This module contains the shared data model: the normalized grid item
//! and the page request passed to remote page sources.

use serde::{Deserialize, Serialize};

/// Fallback dimension applied when a source record carries a missing,
/// non-numeric, or zero width/height.
pub const DEFAULT_DIMENSION: u32 = 200;

// ============================================================================
// Grid Item
// ============================================================================

/// A single content entry in the feed.
///
/// Dimensions are normalized at construction: `width > 0 && height > 0`
/// always holds for a constructed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    /// Opaque unique identifier, stable across pages for the same content
    pub id: String,
    /// URL to the renderable asset
    pub image_url: String,
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
}

impl GridItem {
    /// Create an item from raw source fields, applying dimension defaults.
    ///
    /// Width and height arrive from the API as optional strings. Anything
    /// that does not parse to a positive integer falls back to
    /// [`DEFAULT_DIMENSION`].
    pub fn from_raw(
        id: impl Into<String>,
        image_url: impl Into<String>,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            width: normalize_dimension(width),
            height: normalize_dimension(height),
        }
    }
}

/// Parse a raw dimension string, falling back to the default when the
/// value is absent, non-numeric, or zero.
fn normalize_dimension(raw: Option<&str>) -> u32 {
    match raw.and_then(|s| s.trim().parse::<u32>().ok()) {
        Some(value) if value > 0 => value,
        _ => DEFAULT_DIMENSION,
    }
}

// ============================================================================
// Page Request
// ============================================================================

/// Parameters for fetching one page from a remote page source.
///
/// `offset` is always `page_index * page_size` for the page being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub page_size: u32,
    /// Number of items to skip
    pub offset: u32,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(page_size: u32, offset: u32) -> Self {
        Self { page_size, offset }
    }

    /// Create a request for a zero-based page index
    pub fn for_page(page_index: u32, page_size: u32) -> Self {
        Self {
            page_size,
            offset: page_index * page_size,
        }
    }
}
