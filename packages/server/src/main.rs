use anyhow::Context;
use tracing::{Level, info, warn};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let level = config
        .server
        .log_level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!(
        host = %config.smtp.host,
        port = config.smtp.port,
        tls = ?config.smtp.tls,
        username = %config.smtp.username,
        has_password = config.smtp.has_password(),
        "SMTP account configured"
    );
    if !config.smtp.has_credentials() {
        warn!("SMTP credentials are incomplete; every submission will fail until they are set");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = server::build_router(AppState::new(config))
        .context("Invalid server.cors.allow_origin")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
