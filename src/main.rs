use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use synopsis::infrastructure::observability::{TracingConfig, init_tracing};
use synopsis::infrastructure::storage::spawn_retention_sweeper;
use synopsis::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));
    tracing::debug!(llm = ?settings.llm, storage = ?settings.storage, "Settings loaded");

    let state = AppState::from_settings(&settings).context("failed to build application state")?;

    let sweeper = spawn_retention_sweeper(
        Arc::clone(&state.output_store),
        settings.storage.output_ttl(),
        settings.storage.sweep_interval(),
    );

    let router = create_router(state, settings.limits.max_upload_bytes);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
