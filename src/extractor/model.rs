use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of bullet lines kept in [`ProductRecord::description`].
pub const MAX_DESCRIPTION_ITEMS: usize = 5;
/// Maximum number of image URLs kept in [`ProductRecord::images`].
pub const MAX_IMAGES: usize = 5;

/// Structured facts scraped from a single source product page.
///
/// Every string field is present even when nothing was found on the page;
/// misses are represented by an empty string (or an empty list for images).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub source_id: String,
    pub title: String,
    /// Currency-prefixed price such as `¥1,980`, or empty.
    pub price: String,
    /// Feature bullets joined with `\n`.
    pub description: String,
    pub images: Vec<String>,
    pub brand: String,
    /// Reserved; the extractor never fills it.
    pub category: String,
}

impl ProductRecord {
    pub fn empty(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            ..Self::default()
        }
    }
}
