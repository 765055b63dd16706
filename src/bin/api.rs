use anyhow::Result;
use relister::{api, app_state::AppState, config::Config, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;
    let state = AppState::new(&config)?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = config.bind_addr(),
        source = config.source_base_url(),
        margin = config.margin(),
        locale = %config.locale(),
        "listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
