//! Raw wire types for the trending endpoint
//!
//! The API reports image dimensions as strings (or omits them); the
//! conversion into [`GridItem`] applies the dimension defaults so the
//! rest of the crate only ever sees normalized items.

use crate::types::GridItem;
use serde::Deserialize;

/// Top-level trending response body
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingResponse {
    /// One page of records, in source order
    #[serde(default)]
    pub data: Vec<RawRecord>,
}

impl TrendingResponse {
    /// Convert the page into normalized grid items, preserving order.
    pub fn into_items(self) -> Vec<GridItem> {
        self.data.into_iter().map(RawRecord::into_item).collect()
    }
}

/// A single raw record from the listing API
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Opaque content identifier
    pub id: String,
    /// Available renditions of the image
    pub images: RawImages,
}

impl RawRecord {
    /// Normalize into a [`GridItem`]
    pub fn into_item(self) -> GridItem {
        let rendition = self.images.fixed_width;
        GridItem::from_raw(
            self.id,
            rendition.url,
            rendition.width.as_deref(),
            rendition.height.as_deref(),
        )
    }
}

/// Rendition container; the grid renders the fixed-width variant
#[derive(Debug, Clone, Deserialize)]
pub struct RawImages {
    /// Fixed-width rendition used by the grid
    pub fixed_width: RawRendition,
}

/// One rendition of an image
#[derive(Debug, Clone, Deserialize)]
pub struct RawRendition {
    /// URL of the renderable asset
    pub url: String,
    /// Width in pixels, as a string, when the source provides it
    #[serde(default)]
    pub width: Option<String>,
    /// Height in pixels, as a string, when the source provides it
    #[serde(default)]
    pub height: Option<String>,
}
