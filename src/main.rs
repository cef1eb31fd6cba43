// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Debate Arena API Server
//!
//! Serves debates, votes, chat threads and results over JSON HTTP.

use debate_arena::{config::Config, db::RecordStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Debate Arena API");

    // Open the record store
    let store = match &config.data_dir {
        Some(dir) => {
            tracing::info!(path = %dir.display(), "Using file-backed record store");
            RecordStore::open(dir).await?
        }
        None => {
            tracing::warn!("DATA_DIR not set; records are kept in memory only");
            RecordStore::in_memory()
        }
    };

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store));

    // Build router
    let app = debate_arena::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debate_arena=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
