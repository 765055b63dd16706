//! One-shot conversion: `convert <SOURCE_ID> [MARKUP_FILE]`.
//!
//! Without a markup file the product page is downloaded from
//! `SOURCE_BASE_URL`. The result is printed as the same JSON document the
//! HTTP API returns.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use relister::{
    config::Config,
    fetcher::{HttpPageSource, ProductPageSource},
    listings::{self, dtos::GenerateResponse},
    telemetry,
    transformer::Transformer,
};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(source_id) = args.next() else {
        bail!("usage: convert <SOURCE_ID> [MARKUP_FILE]");
    };
    let markup_path = args.next();

    let config = Config::from_env()?;
    let transformer = Transformer::new(config.transform_config());

    let markup = match markup_path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read markup from {path}"))?,
        None => HttpPageSource::new(config.source_base_url())?
            .fetch_markup(&source_id)
            .await?,
    };

    let generated = listings::from_markup(&transformer, &markup, &source_id)?;
    let response = GenerateResponse {
        success: true,
        source: generated.source,
        listing: generated.listing,
        generated_at: Utc::now(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
