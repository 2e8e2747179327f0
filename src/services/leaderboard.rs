// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge leaderboard pipeline.
//!
//! Handles the full computation over an already-fetched workout list:
//! 1. Bucket workouts by ISO week, then by user
//! 2. Rank each week
//! 3. For each requested top-N, accumulate points and rank overall
//!
//! Weekly rankings are computed once and shared by every top-N variant.

use std::collections::BTreeMap;

use crate::error::LeaderboardError;
use crate::models::{Activity, RankedUser, WeekKey};
use crate::services::grouping::group_weeks_by_user;
use crate::services::ranking::{aggregate_points, rank_overall, rank_weeks, WeeklyRankings};

/// Top-N variants shown side by side when nothing else is configured.
pub const DEFAULT_TOP_N_VARIANTS: [usize; 3] = [3, 4, 5];

/// Largest top-N accepted from configuration or a request.
pub const MAX_TOP_N: usize = 50;

/// Most top-N variants computed in one request.
pub const MAX_TOP_N_VARIANTS: usize = 10;

/// Overall ranking under one top-N scoring rule.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallStanding {
    pub top_n: usize,
    pub ranking: Vec<RankedUser>,
}

/// Everything the presentation layer needs for one challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    /// Ranked users per week
    pub weeks: WeeklyRankings,
    /// Raw workout count per week
    pub week_activity_counts: BTreeMap<WeekKey, usize>,
    /// One standing per requested top-N, in request order
    pub overall: Vec<OverallStanding>,
}

impl Leaderboard {
    /// Compute weekly and overall rankings from scratch.
    ///
    /// An empty workout list yields an empty leaderboard. A single workout
    /// with an unparsable `occurred_at` fails the whole computation.
    pub fn compute(
        activities: &[Activity],
        top_n_variants: &[usize],
    ) -> Result<Self, LeaderboardError> {
        let grouped = group_weeks_by_user(activities)?;

        let week_activity_counts: BTreeMap<WeekKey, usize> = grouped
            .iter()
            .map(|(week, users)| {
                (
                    *week,
                    users.values().map(|u| u.activities.len()).sum::<usize>(),
                )
            })
            .collect();

        let weeks = rank_weeks(grouped)?;

        let overall = top_n_variants
            .iter()
            .map(|&top_n| OverallStanding {
                top_n,
                ranking: rank_overall(aggregate_points(&weeks, top_n)),
            })
            .collect();

        tracing::debug!(
            activities = activities.len(),
            weeks = weeks.len(),
            variants = ?top_n_variants,
            "Leaderboard computed"
        );

        Ok(Self {
            weeks,
            week_activity_counts,
            overall,
        })
    }

    /// False when there was nothing to rank.
    pub fn has_data(&self) -> bool {
        !self.weeks.is_empty()
    }

    /// Overall standing for a given top-N, if it was requested.
    pub fn standing(&self, top_n: usize) -> Option<&OverallStanding> {
        self.overall.iter().find(|s| s.top_n == top_n)
    }
}

/// Parse a comma-separated top-N list such as `"3,4,5"`.
pub fn parse_top_n_variants(raw: &str) -> Result<Vec<usize>, LeaderboardError> {
    let variants = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let top_n = part.parse::<usize>().map_err(|_| {
                LeaderboardError::InvalidTopN(format!("'{}' is not a whole number", part))
            })?;
            if top_n == 0 || top_n > MAX_TOP_N {
                return Err(LeaderboardError::InvalidTopN(format!(
                    "{} is outside 1..={}",
                    top_n, MAX_TOP_N
                )));
            }
            Ok(top_n)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if variants.is_empty() {
        return Err(LeaderboardError::InvalidTopN(
            "at least one value is required".to_string(),
        ));
    }
    if variants.len() > MAX_TOP_N_VARIANTS {
        return Err(LeaderboardError::InvalidTopN(format!(
            "at most {} values are allowed",
            MAX_TOP_N_VARIANTS
        )));
    }

    Ok(variants)
}
