use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::extractor::ProductRecord;
use crate::transformer::ListingRecord;

/// Length of an Amazon Standard Identification Number.
pub const SOURCE_ID_LEN: usize = 10;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(alias = "asin")]
    pub source_id: String,
}

impl GenerateRequest {
    /// The trimmed source id, if it is a 10 character alphanumeric code.
    pub fn validate(&self) -> Result<&str, String> {
        let source_id = self.source_id.trim();
        if source_id.len() != SOURCE_ID_LEN
            || !source_id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(format!(
                "sourceId must be {SOURCE_ID_LEN} alphanumeric characters"
            ));
        }
        Ok(source_id)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub source: ProductRecord,
    pub listing: ListingRecord,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
