pub mod errors;
pub mod fields;
pub mod locator;
pub mod model;
pub mod profile;

#[cfg(test)]
mod tests;

pub use errors::ParseError;
pub use locator::Locator;
pub use model::ProductRecord;
pub use profile::SourceProfile;

use scraper::Html;
use tracing::{debug, info};

/// Extract a [`ProductRecord`] from an Amazon Japan product page.
pub fn extract(markup: &str, source_id: &str) -> Result<ProductRecord, ParseError> {
    extract_with(&SourceProfile::amazon_jp(), markup, source_id)
}

/// Extract a [`ProductRecord`] using the locators of `profile`.
///
/// Fields that cannot be found are left empty; only markup that does not
/// parse into a document is an error.
pub fn extract_with(
    profile: &SourceProfile,
    markup: &str,
    source_id: &str,
) -> Result<ProductRecord, ParseError> {
    if markup.trim().is_empty() {
        return Err(ParseError::EmptyMarkup);
    }

    if !markup.contains('<') {
        return Err(ParseError::NotMarkup(markup.len()));
    }

    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        debug!(
            source_id,
            errors = document.errors.len(),
            "markup parsed with recoverable errors"
        );
    }

    let record = ProductRecord {
        source_id: source_id.to_string(),
        title: fields::title(profile, &document),
        price: fields::price(profile, &document),
        description: fields::description(profile, &document),
        images: fields::images(profile, &document),
        brand: fields::brand(profile, &document),
        category: String::new(),
    };

    info!(
        source_id,
        has_title = !record.title.is_empty(),
        has_price = !record.price.is_empty(),
        images = record.images.len(),
        has_brand = !record.brand.is_empty(),
        "extracted product record"
    );

    Ok(record)
}
