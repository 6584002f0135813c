use anyhow::Context;

use expkit::env_config;
use expkit::server::{create_router, SaverConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_config::init_tracing();
    env_config::init_base_path().context("failed to enter EXPKIT_BASE_PATH")?;
    let addr = env_config::server_addr();

    let config = SaverConfig::default();
    if !config.session_dir.is_dir() {
        tracing::warn!(
            dir = %config.session_dir.display(),
            "session directory does not exist, saves will fail until it is created"
        );
    }
    let app = create_router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server is running. Press Ctrl+C to stop.");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("stopping server");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install CTRL+C signal handler");
        std::future::pending::<()>().await;
    }
}
