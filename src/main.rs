use std::net::SocketAddr;

use tokio::net::TcpListener;
use verifydip::{
    AppState, build_router,
    config::Config,
    error::Result,
    utils::server::{init_tracing, shutdown_signal},
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    tokio::fs::create_dir_all(&config.upload.dir).await?;
    tracing::info!(dir = %config.upload.dir.display(), "Upload directory ready");

    let server_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::in_memory(config);
    tracing::info!("In-memory store initialized");

    let app = build_router(state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
