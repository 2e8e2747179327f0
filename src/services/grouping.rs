// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Partition a challenge's workouts into week and per-user buckets.
//!
//! Buckets are sparse: a user with no workouts in a week has no entry for
//! that week. Workouts keep their source order inside every bucket, which
//! `metrics::consecutive_days` depends on.

use std::collections::BTreeMap;

use crate::error::LeaderboardError;
use crate::models::{AccountId, Activity, UserWeekActivities, WeekKey};
use crate::services::week::activity_week;

/// Per-user buckets for a single week, ordered by account ID.
pub type UserBuckets = BTreeMap<AccountId, UserWeekActivities>;

/// Split workouts by ISO week, preserving input order inside each week.
pub fn group_by_week(
    activities: &[Activity],
) -> Result<BTreeMap<WeekKey, Vec<Activity>>, LeaderboardError> {
    activities
        .iter()
        .try_fold(BTreeMap::<WeekKey, Vec<Activity>>::new(), |mut weeks, activity| {
            let key = activity_week(activity)?;
            weeks
                .entry(key)
                .or_default()
                .push(activity.clone());
            Ok(weeks)
        })
}

/// Split one week's workouts by account, preserving input order per user.
pub fn group_by_user<I>(activities: I) -> UserBuckets
where
    I: IntoIterator<Item = Activity>,
{
    activities
        .into_iter()
        .fold(UserBuckets::new(), |mut users, activity| {
            users
                .entry(activity.account.id)
                .or_insert_with(|| UserWeekActivities::new(activity.account.clone()))
                .activities
                .push(activity);
            users
        })
}

/// Group by week, then by user within each week.
pub fn group_weeks_by_user(
    activities: &[Activity],
) -> Result<BTreeMap<WeekKey, UserBuckets>, LeaderboardError> {
    Ok(group_by_week(activities)?
        .into_iter()
        .map(|(week, week_activities)| (week, group_by_user(week_activities)))
        .collect())
}
