use anyhow::Context;
use bastion::router::init_router;
use bastion::state::init_app_state;
use bastion_config::{LogConfig, ServerConfig};
use bastion_observability::init_logging;
use dotenvy::dotenv;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _log_guard = init_logging(&LogConfig::from_env());

    let state = init_app_state().context("failed to load authentication settings")?;
    let server_config = ServerConfig::from_env()?;
    let address = server_config.bind_address();

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/docs", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
