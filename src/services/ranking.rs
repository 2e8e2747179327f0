// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly and overall rankings.
//!
//! Both rankings sort descending with a stable sort, so users tied on every
//! criterion keep the order of the input map (ascending account ID).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::LeaderboardError;
use crate::models::{AccountId, RankedUser, UserWeekActivities, WeekKey, WeeklyRankedUser};
use crate::services::grouping::UserBuckets;
use crate::services::metrics::{consecutive_days, total_duration};

/// Number of scoring places per week when the caller doesn't pick one.
pub const DEFAULT_TOP_N: usize = 3;

/// Weekly rankings keyed by week, best user first.
pub type WeeklyRankings = BTreeMap<WeekKey, Vec<WeeklyRankedUser>>;

/// Attach metrics to one user's week.
fn with_metrics(user: UserWeekActivities) -> Result<WeeklyRankedUser, LeaderboardError> {
    let consecutive_days = consecutive_days(&user.activities)?;
    let total_duration = total_duration(&user.activities);
    Ok(WeeklyRankedUser {
        account: user.account,
        activities: user.activities,
        consecutive_days,
        total_duration,
    })
}

fn weekly_order(a: &WeeklyRankedUser, b: &WeeklyRankedUser) -> Ordering {
    a.activity_count()
        .cmp(&b.activity_count())
        .then(a.consecutive_days.cmp(&b.consecutive_days))
        .then(a.total_duration.total_cmp(&b.total_duration))
}

fn overall_order(a: &RankedUser, b: &RankedUser) -> Ordering {
    a.points
        .cmp(&b.points)
        .then(a.consecutive_days.cmp(&b.consecutive_days))
        .then(a.total_duration.total_cmp(&b.total_duration))
}

/// Rank one week by workout count, then consecutive days, then duration.
pub fn rank_week(users: UserBuckets) -> Result<Vec<WeeklyRankedUser>, LeaderboardError> {
    let mut ranked = users
        .into_values()
        .map(with_metrics)
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by(|a, b| weekly_order(b, a));
    Ok(ranked)
}

/// Rank every week independently.
pub fn rank_weeks(
    weeks: BTreeMap<WeekKey, UserBuckets>,
) -> Result<WeeklyRankings, LeaderboardError> {
    weeks
        .into_iter()
        .map(|(week, users)| Ok((week, rank_week(users)?)))
        .collect()
}

/// Points for finishing at 0-based `rank` in a week with `top_n` scoring places.
pub fn points_for_rank(top_n: usize, rank: usize) -> u32 {
    u32::try_from(top_n.saturating_sub(rank)).unwrap_or(u32::MAX)
}

/// Accumulate points, consecutive days and duration across all weeks.
///
/// Only points depend on the weekly position; days and duration accrue for
/// everyone who worked out that week.
pub fn aggregate_points(
    weekly: &WeeklyRankings,
    top_n: usize,
) -> BTreeMap<AccountId, RankedUser> {
    weekly
        .values()
        .flat_map(|ranking| ranking.iter().enumerate())
        .fold(BTreeMap::<AccountId, RankedUser>::new(), |mut totals, (rank, user)| {
            let current = totals
                .remove(&user.account.id)
                .unwrap_or_else(|| RankedUser::new(user.account.clone()));
            totals.insert(
                user.account.id,
                current.add_week(points_for_rank(top_n, rank), user),
            );
            totals
        })
}

/// Rank accumulated totals by points, then consecutive days, then duration.
pub fn rank_overall(totals: BTreeMap<AccountId, RankedUser>) -> Vec<RankedUser> {
    let mut ranked: Vec<RankedUser> = totals.into_values().collect();
    ranked.sort_by(|a, b| overall_order(b, a));
    ranked
}
