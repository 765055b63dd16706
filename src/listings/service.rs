use thiserror::Error;
use tracing::{info, instrument};

use crate::extractor::{self, ParseError, ProductRecord};
use crate::fetcher::{FetchError, ProductPageSource};
use crate::transformer::{ListingRecord, Transformer};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to fetch product page: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to parse product page: {0}")]
    Parse(#[from] ParseError),
}

/// Both halves of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub source: ProductRecord,
    pub listing: ListingRecord,
}

/// Fetch the page for `source_id`, extract it and build the listing.
#[instrument(skip(source, transformer))]
pub async fn generate(
    source: &dyn ProductPageSource,
    transformer: &Transformer,
    source_id: &str,
) -> Result<Generated, GenerateError> {
    let markup = source.fetch_markup(source_id).await?;
    let generated = from_markup(transformer, &markup, source_id)?;
    info!(title = %truncated(&generated.source.title, 50), "listing generated");
    Ok(generated)
}

/// Run extraction and transformation on markup the caller already has.
pub fn from_markup(
    transformer: &Transformer,
    markup: &str,
    source_id: &str,
) -> Result<Generated, ParseError> {
    let source = extractor::extract(markup, source_id)?;
    let listing = transformer.transform(&source);
    Ok(Generated { source, listing })
}

fn truncated(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
