//! Preview server for generated output.

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tracing::info;

/// Router serving `root` as static files.
pub fn router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(CompressionLayer::new())
}

/// Serve `root` on `addr` until the process is stopped.
pub async fn serve(root: &Path, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Serving {} on http://{}", root.display(), addr);

    axum::serve(listener, router(root)).await.context("Server error")?;

    Ok(())
}
