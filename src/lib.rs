// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! GymRats leaderboard: weekly and overall rankings for a fitness challenge
//!
//! This crate fetches a challenge's workouts from GymRats, buckets them by
//! ISO week, ranks each week and folds the weeks into overall standings
//! under one or more "top N scorers per week" rules.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::GymRatsClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub source: GymRatsClient,
}
