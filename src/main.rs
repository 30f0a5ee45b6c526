// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ProSport Tracker API Server
//!
//! Personal workout log with filtered history, CSV export and a simulated
//! cloud backup.

use prosport_tracker::{config::Config, db::FileStorage, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting ProSport Tracker API");

    let storage = FileStorage::new(&config.data_dir)?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        export_scope = ?config.export_scope,
        ack_enabled = config.ack_url.is_some(),
        "Storage initialized"
    );

    let state = Arc::new(AppState::new(config.clone(), Arc::new(storage))?);

    let app = prosport_tracker::routes::create_router(state);

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

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prosport_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
