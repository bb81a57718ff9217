//! Flightlog HTTP Server Binary
//!
//! Entry point for the flightlog REST API server. Initializes the
//! repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin flightlog-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, overrides flightlog.toml)
//! - `PORT`: Server port (default: 8080, overrides flightlog.toml)
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use flightlog::config::ServerConfig;
use flightlog::db::repositories::LocalRepository;
use flightlog::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting flightlog HTTP server");

    let config = ServerConfig::load()?;

    let repository = Arc::new(LocalRepository::new());
    info!("Repository initialized (in-memory backend)");

    let state = AppState::new(repository);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
