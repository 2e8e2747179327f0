// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod ranking;

pub use activity::{Account, AccountId, Activity};
pub use ranking::{RankedUser, UserWeekActivities, WeekKey, WeeklyRankedUser};
