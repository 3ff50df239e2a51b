use std::sync::Arc;

use anyhow::Context;
use trustbank_api::config::ApiConfig;
use trustbank_core::Registry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trustbank_observability::init();

    let config = ApiConfig::from_env()?;
    if config.admin_secret.is_default_placeholder() {
        tracing::warn!("ADMIN_TOKEN not set; using insecure dev default");
    }

    let addr = config.socket_addr();
    let app = trustbank_api::app::build_app(Arc::new(Registry::new()), config.admin_secret);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Trust Bank API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
