use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing ready for publication on the target marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    /// At most 128 characters.
    pub item_name: String,
    pub item_price: u64,
    pub item_description: String,
    pub catch_copy: String,
    /// Slug plus `_YYYYMMDD` generation date.
    pub item_url: String,
    pub images: Vec<String>,
    pub category_id: String,
    /// Comma separated, at most 10 unique entries.
    pub keywords: String,
    pub original_source_id: String,
}
