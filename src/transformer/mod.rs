pub mod category;
pub mod copy;
pub mod keywords;
pub mod locale;
pub mod model;
pub mod pricing;
pub mod slug;
pub mod title;

pub use locale::Locale;
pub use model::ListingRecord;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::extractor::ProductRecord;

/// Parameters of the listing rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    /// Multiplier applied to the source price before rounding.
    pub margin: f64,
    pub locale: Locale,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            margin: pricing::DEFAULT_MARGIN,
            locale: Locale::default(),
        }
    }
}

/// Turns extracted product records into target-marketplace listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Build a listing dated today (local time).
    pub fn transform(&self, record: &ProductRecord) -> ListingRecord {
        self.transform_on(record, Local::now().date_naive())
    }

    /// Build a listing whose item URL carries `date`.
    pub fn transform_on(&self, record: &ProductRecord, date: NaiveDate) -> ListingRecord {
        let phrases = self.config.locale.phrases();

        let listing = ListingRecord {
            item_name: title::optimize_title(&record.title, phrases),
            item_price: pricing::calculate_price(&record.price, self.config.margin),
            item_description: copy::compose_description(record, phrases),
            catch_copy: copy::catch_copy(&record.brand, phrases),
            item_url: slug::item_url(&record.title, date),
            images: record.images.clone(),
            category_id: category::suggest_category(&record.title).to_string(),
            keywords: keywords::derive_keywords(&record.title, &record.brand, phrases),
            original_source_id: record.source_id.clone(),
        };

        info!(
            source_id = %record.source_id,
            price = listing.item_price,
            category = %listing.category_id,
            locale = %self.config.locale,
            "generated listing"
        );

        listing
    }
}

/// Transform with the default margin and locale.
pub fn transform(record: &ProductRecord) -> ListingRecord {
    Transformer::default().transform(record)
}
