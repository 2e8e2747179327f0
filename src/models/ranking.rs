// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Week buckets and ranking records built by the leaderboard pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Account, Activity};

/// ISO-8601 week bucket.
///
/// Field order makes the derived `Ord` chronological (year first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    /// ISO week-numbering year (may differ from the calendar year near Jan 1)
    pub year: i32,
    /// ISO week number, 1..=53
    pub week: u32,
}

impl WeekKey {
    pub fn new(week: u32, year: i32) -> Self {
        Self { year, week }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// One account's workouts within a single week, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeekActivities {
    pub account: Account,
    pub activities: Vec<Activity>,
}

impl UserWeekActivities {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            activities: Vec::new(),
        }
    }
}

/// A user's standing within one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRankedUser {
    pub account: Account,
    pub activities: Vec<Activity>,
    pub consecutive_days: u32,
    /// Minutes
    pub total_duration: f64,
}

impl WeeklyRankedUser {
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

/// A user's accumulated standing across every week of the challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedUser {
    pub account: Account,
    pub points: u32,
    /// Sum of weekly `consecutive_days`
    pub consecutive_days: u32,
    /// Sum of weekly durations, in minutes
    pub total_duration: f64,
}

impl RankedUser {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            points: 0,
            consecutive_days: 0,
            total_duration: 0.0,
        }
    }

    /// Fold one week's result into the running totals.
    ///
    /// Counters saturate, so an oversized top-N can't overflow the fold.
    pub fn add_week(mut self, points: u32, week: &WeeklyRankedUser) -> Self {
        self.points = self.points.saturating_add(points);
        self.consecutive_days = self.consecutive_days.saturating_add(week.consecutive_days);
        self.total_duration += week.total_duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_key_orders_by_year_first() {
        let late_2020 = WeekKey::new(53, 2020);
        let early_2021 = WeekKey::new(1, 2021);
        assert!(late_2020 < early_2021);
        assert!(WeekKey::new(2, 2021) > early_2021);
    }

    #[test]
    fn test_week_key_display() {
        assert_eq!(WeekKey::new(7, 2024).to_string(), "2024-W07");
        assert_eq!(WeekKey::new(53, 2020).to_string(), "2020-W53");
    }
}
