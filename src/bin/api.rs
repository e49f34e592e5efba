use std::sync::Arc;

use anyhow::Context;
use lexbrief::api::{AppState, router};
use lexbrief::core::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    lexbrief::setup_logging();

    let config = AppConfig::load()?;
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::from_config(config)?);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!(
        addr = %bind_addr,
        model = %state.summarizer().model_name(),
        "Legal document summarizer listening"
    );

    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")?;
    Ok(())
}
