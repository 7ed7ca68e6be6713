//! Activity analytics HTTP server binary.
//!
//! Loads the activity snapshot once, derives the dashboard and serves it.
//!
//! # Usage
//!
//! ```bash
//! # Read from the live endpoint (default http://localhost:5000/api/activities)
//! cargo run --bin activity-server
//!
//! # Read from a JSON file
//! ACTIVITY_FILE=activities.json cargo run --bin activity-server
//! ```
//!
//! # Environment Variables
//!
//! - `ACTIVITY_CONFIG`: Path to a TOML config file
//! - `ACTIVITY_SOURCE`: `remote` or `local`
//! - `ACTIVITY_API_URL`: Activity endpoint for the remote source
//! - `ACTIVITY_FILE`: JSON file for the local source
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use activity_analytics::config::AppConfig;
use activity_analytics::http::{create_router, AppState};
use activity_analytics::source::RepositoryFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting activity analytics server");

    let config = AppConfig::load()?;
    let repository = RepositoryFactory::from_settings(&config.source)?;
    info!(source = %repository.describe(), "Activity source configured");

    let state = AppState::load(repository, config.layout()).await;
    {
        let dashboard = state.dashboard.read();
        if !dashboard.status().is_loaded() {
            warn!("Serving the zero-state dashboard: {:?}", dashboard.status());
        }
    }

    let app = create_router(state);

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Dashboard: http://{}/v1/dashboard", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
