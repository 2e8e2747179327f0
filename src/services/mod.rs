// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod grouping;
pub mod gymrats;
pub mod leaderboard;
pub mod metrics;
pub mod ranking;
pub mod week;

pub use gymrats::GymRatsClient;
pub use leaderboard::{Leaderboard, OverallStanding};
