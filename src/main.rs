//! # Stemplate
//!
//! A preview server for the stemplate template helpers. It renders tweet text
//! and calls helpers over HTTP so template output can be inspected directly.
//!
//! ## Environment Variables
//!
//! - `PORT`: Server port (defaults to 3000)
//! - `TWEET_LINK_THRESHOLD`: Links longer than this are truncated (defaults to 60)
//! - `TWEET_LINK_DISPLAY_LENGTH`: Visible prefix of truncated links (defaults to 50)
//!
//! ## API Endpoints
//!
//! - `GET /`: Returns a welcome message
//! - `GET /health`: Returns service health status
//! - `POST /render/tweet`: Renders the request body as tweet HTML
//! - `GET /helpers`: Lists registered helpers
//! - `POST /helpers/:name`: Calls a helper

use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;

use stemplate::config::{get_server_port, render_options_from_env};
use stemplate::handlers::{build_router, AppState};

/// Main entry point for the stemplate preview service.
///
/// This function initializes the logging system, builds the router and serves
/// requests until Ctrl-C is received.
///
/// # Logging
///
/// The application uses the `env_logger` crate for logging. Log levels
/// can be controlled via the `RUST_LOG` environment variable.
///
/// # Example Usage
///
/// ```bash
/// # Run with default port 3000
/// cargo run
///
/// # Run on custom port with debug logging
/// PORT=8080 RUST_LOG=debug cargo run
/// ```
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system
    env_logger::init();

    let state = Arc::new(AppState::new(render_options_from_env()));
    info!(
        "Loaded {} template helpers",
        state.registry.names().len()
    );
    let app = build_router(state);

    // Get the server port and bind address
    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting stemplate server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("HTTP server error: {}", e);
            e
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
