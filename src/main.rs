// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GymRats Leaderboard API Server
//!
//! Serves weekly and overall rankings for a GymRats challenge, computed
//! fresh from the challenge's workouts on every request.

use gymrats_leaderboard::{config::Config, services::GymRatsClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        challenge_id = %config.challenge_id,
        variants = ?config.top_n_variants,
        "Starting GymRats leaderboard API"
    );

    // Workout source: saved file for local dev, GymRats API otherwise
    let source = match &config.activities_file {
        Some(path) => {
            tracing::info!(path = %path, "Serving workouts from file");
            GymRatsClient::from_file(path).expect("Failed to load workouts file")
        }
        None => GymRatsClient::new(&config).expect("Failed to initialize GymRats client"),
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        source,
    });

    // Build router
    let app = gymrats_leaderboard::routes::create_router(state);

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

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gymrats_leaderboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
