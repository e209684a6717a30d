use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_relay::config::{self, Config};
use chat_relay::llm::OpenAICompatProvider;
use chat_relay::server::{AppState, build_app};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("Using model: {}", config.model);
    match &config.api_base {
        Some(base) => info!("Using API base override: {}", base),
        None => info!("Using provider default API base"),
    }

    let provider = OpenAICompatProvider::new(config.api_base.clone(), config.api_key.clone());
    let state = AppState {
        config: Arc::new(config),
        provider: Arc::new(provider),
    };

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(config::BIND_ADDR).await?;
    info!("Listening on {}", config::BIND_ADDR);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutdown signal received, shutting down");
}
