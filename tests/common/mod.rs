// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use gymrats_leaderboard::config::Config;
use gymrats_leaderboard::models::{Account, Activity};
use gymrats_leaderboard::routes::create_router;
use gymrats_leaderboard::services::gymrats::parse_workouts;
use gymrats_leaderboard::services::GymRatsClient;
use gymrats_leaderboard::AppState;
use std::sync::Arc;

pub const FIXTURE_PATH: &str = "tests/fixtures/workouts.json";

/// Build a workout with an empty payload.
#[allow(dead_code)]
pub fn activity(id: u64, account_id: u64, occurred_at: &str, duration: f64) -> Activity {
    Activity {
        id,
        account: Account {
            id: account_id,
            full_name: format!("Athlete {}", account_id),
            profile_picture_url: None,
        },
        occurred_at: occurred_at.to_string(),
        duration,
        payload: serde_json::Map::new(),
    }
}

/// Workouts from the committed fixture.
#[allow(dead_code)]
pub fn fixture_activities() -> Vec<Activity> {
    let json = std::fs::read_to_string(FIXTURE_PATH).expect("Failed to read workouts fixture");
    parse_workouts(&json).expect("Failed to parse workouts fixture")
}

/// Create a test app whose source serves `activities`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(activities: Vec<Activity>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        source: GymRatsClient::from_fixture(activities),
    });

    (create_router(state.clone()), state)
}

/// Create a test app whose source points at a closed local port.
#[allow(dead_code)]
pub fn create_unreachable_source_app() -> axum::Router {
    let mut config = Config::test_default();
    config.gymrats_api_url = "http://127.0.0.1:9/api".to_string();
    let source = GymRatsClient::new(&config).expect("Failed to build client");

    create_router(Arc::new(AppState { config, source }))
}
