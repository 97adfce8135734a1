//! Telescope Through Time HTTP Server Binary
//!
//! Entry point for the TTT REST API server. It builds the NASA client from
//! environment configuration, sets up the HTTP router, and starts serving.
//!
//! # Usage
//!
//! ```bash
//! NASA_API_KEY=your-key cargo run --bin ttt-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `NASA_API_KEY`: NASA API key (default: DEMO_KEY, heavily rate-limited)
//! - `NASA_BASE_URL`: NASA API gateway (default: https://api.nasa.gov)
//! - `NASA_MAX_RETRIES`: Retry budget per upstream lookup (default: 3)
//! - `TTT_YEAR`: Calendar year of the star map (default: 2025)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use telescope_time::client::{NasaClient, NasaConfig};
use telescope_time::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Telescope Through Time server");

    // Build the NASA client from environment configuration
    let config = NasaConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(base_url = %config.base_url, year = config.year, "NASA client configured");
    let client = Arc::new(NasaClient::new(config)?);

    // Create application state and router
    let state = AppState::new(client);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
