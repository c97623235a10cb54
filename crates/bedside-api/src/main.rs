use std::env;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging, one event per line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let bind = env::var("BEDSIDE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| eyre::eyre!("failed to bind {bind}: {e}"))?;

    tracing::info!(addr = %listener.local_addr()?, "bedside api listening");

    axum::serve(listener, bedside_api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bedside api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
    }
}
