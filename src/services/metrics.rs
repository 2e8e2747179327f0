// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user workout metrics.

use chrono::{Datelike, Weekday};

use crate::error::LeaderboardError;
use crate::models::Activity;

/// Count weekday changes across workouts, in list order.
///
/// The first workout always counts. Later workouts count only when their
/// weekday differs from the workout right before them, so repeats that are
/// not adjacent are counted again.
///
/// Only the weekday is compared, not the calendar date: two workouts a week
/// apart on the same weekday read as "no change". Use a full date here if
/// this ever needs to be a real streak.
pub fn consecutive_days(activities: &[Activity]) -> Result<u32, LeaderboardError> {
    let weekdays = activities
        .iter()
        .map(|a| a.occurred_at_time().map(|t| t.weekday()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(count_day_changes(weekdays))
}

fn count_day_changes<I: IntoIterator<Item = Weekday>>(weekdays: I) -> u32 {
    let mut previous = None;
    let mut changes = 0;
    for day in weekdays {
        if previous != Some(day) {
            changes += 1;
        }
        previous = Some(day);
    }
    changes
}

/// Total workout duration in minutes.
pub fn total_duration(activities: &[Activity]) -> f64 {
    activities.iter().map(|a| a.duration).sum()
}
