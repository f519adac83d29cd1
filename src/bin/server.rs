//! items-api HTTP server binary.
//!
//! Serves the item CRUD routes over an in-memory store.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `HOST` — Bind address (default: 0.0.0.0)
//! - `RUST_LOG` — Tracing filter (default: "info,items_api=debug")
//!
//! # Usage
//!
//! ```bash
//! PORT=3000 cargo run --bin server
//! ```

use std::sync::Arc;

use anyhow::Context;
use items_api::config::ServerConfig;
use items_api::server::app_router;
use items_api::stores::MemoryItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| items_api::config::DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let store = Arc::new(MemoryItemStore::new());
    let app = app_router(store);

    let bind_addr = config.bind_addr();
    tracing::info!("items-api {} starting on {}", items_api::VERSION, bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("items-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
