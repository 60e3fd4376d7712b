use anyhow::Context;

use inkpost_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let installed = inkpost_observability::init();
    tracing::debug!(installed, "tracing initialised");

    let config = ServerConfig::default();
    let app = inkpost_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
