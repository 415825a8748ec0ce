//! # Brushline Web Server
//!
//! Serves the painting estimate form.
//!
//! ```text
//! paint_web --host 0.0.0.0 --port 8080
//! PAINT_DEBUG=true paint_web
//! ```

use anyhow::Context;
use clap::Parser;
use paint_core::SystemClock;
use paint_web::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .init();

    let app = build_router(AppState::new(SystemClock));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!(debug = config.debug, "paint_web listening on {bind_addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
