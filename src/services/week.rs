// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ISO-8601 week bucketing.
//!
//! Weeks start on Monday and week 1 is the one containing the year's first
//! Thursday, so the last days of December can fall in week 1 of the next
//! year and the first days of January in week 52/53 of the previous one.

use chrono::{DateTime, Datelike, TimeZone};

use crate::error::LeaderboardError;
use crate::models::{Activity, WeekKey};

/// Week bucket for a timestamp, in the timestamp's own timezone.
pub fn week_key<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> WeekKey {
    let iso = timestamp.iso_week();
    WeekKey::new(iso.week(), iso.year())
}

/// Week bucket for an activity's `occurred_at`.
pub fn activity_week(activity: &Activity) -> Result<WeekKey, LeaderboardError> {
    activity.occurred_at_time().map(|t| week_key(&t))
}
