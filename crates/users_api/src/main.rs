//! Users REST API Server
//!
//! Main binary for running the API server against a seeded in-memory store.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
//! - `RUST_LOG`: Log level (default: info)
//! - `LOG_FORMAT`: `text` or `json` (default: text)

use std::env;

use tracing_subscriber::EnvFilter;
use users_api::{ApiConfig, ApiServer, AppState, LogFormat};
use users_core::SEED_USER_COUNT;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::new(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = ApiConfig::from_env()?;

    init_tracing(config.log_format);

    let state = AppState::seeded()?;

    tracing::info!("Starting users API server");
    tracing::info!("Seeded store with {} users", SEED_USER_COUNT);

    // Start server with graceful shutdown
    ApiServer::new(config, state).serve().await
}
