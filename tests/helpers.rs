use axum::Router;
use std::sync::Arc;

use relister::{
    api,
    app_state::AppState,
    fetcher::HttpPageSource,
    transformer::{TransformConfig, Transformer},
};

pub fn test_app(source_base_url: &str, config: TransformConfig) -> Router {
    let page_source =
        HttpPageSource::new(source_base_url).expect("Failed to build page source");
    let state = AppState {
        page_source: Arc::new(page_source),
        transformer: Transformer::new(config),
    };

    api::router(state)
}
