use anyhow::Result;
use std::sync::Arc;

use trivia_http::{AppState, create_router};

use crate::connect;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = connect().await?;
    let state = Arc::new(AppState::new(storage));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down HTTP server");
}
