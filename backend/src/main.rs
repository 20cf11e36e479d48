//! Main entry point for the Chirpy backend.
//!
//! This file loads the configuration, builds the shared application state,
//! and serves the Axum router. Everything the process holds in memory lives
//! only as long as the process.

mod api;
mod app;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use anyhow::Result;
use app::{AppState, build_router};
use config::Config;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let config = Config::from_env()?;
    let server_port = config.server_port;
    let state = AppState::new(config)?;

    let app = build_router(state);

    let bind_address = format!("0.0.0.0:{}", server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Starting Chirpy server on port {}", server_port);
    axum::serve(listener, app).await?;

    Ok(())
}
