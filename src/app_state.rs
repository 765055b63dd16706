use crate::fetcher::{FetchError, HttpPageSource, ProductPageSource};
use crate::{config::Config, transformer::Transformer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub page_source: Arc<dyn ProductPageSource>,
    pub transformer: Transformer,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            page_source: Arc::new(HttpPageSource::new(config.source_base_url())?),
            transformer: Transformer::new(config.transform_config()),
        })
    }
}
