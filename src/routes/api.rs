// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public leaderboard API.

use crate::error::Result;
use crate::models::{Account, Activity, RankedUser, WeeklyRankedUser};
use crate::services::leaderboard::{parse_top_n_variants, Leaderboard, OverallStanding};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/leaderboard", get(get_leaderboard))
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    /// Comma-separated top-N variants, e.g. "3,4,5"
    top_n: Option<String>,
}

// ─── Response Types ──────────────────────────────────────────

/// Full leaderboard response.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    /// False when the challenge has no workouts (or the fetch failed)
    pub has_data: bool,
    pub generated_at: String,
    /// Oldest week first
    pub weeks: Vec<WeekResponse>,
    pub overall: Vec<OverallResponse>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeekResponse {
    pub year: i32,
    pub week: u32,
    /// e.g. "2024-W11"
    pub label: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_count: usize,
    pub ranking: Vec<WeeklyEntry>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyEntry {
    /// 1-based position
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub rank: usize,
    pub account: Account,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_count: usize,
    pub consecutive_days: u32,
    pub total_duration: f64,
    pub activities: Vec<ActivitySummary>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub occurred_at: String,
    pub duration: f64,
    pub title: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OverallResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub top_n: usize,
    pub ranking: Vec<OverallEntry>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OverallEntry {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub rank: usize,
    pub account: Account,
    pub points: u32,
    pub consecutive_days: u32,
    pub total_duration: f64,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            occurred_at: activity.occurred_at.clone(),
            duration: activity.duration,
            title: activity.title().map(str::to_string),
        }
    }
}

fn weekly_entry(index: usize, user: &WeeklyRankedUser) -> WeeklyEntry {
    WeeklyEntry {
        rank: index + 1,
        account: user.account.clone(),
        activity_count: user.activity_count(),
        consecutive_days: user.consecutive_days,
        total_duration: user.total_duration,
        activities: user.activities.iter().map(ActivitySummary::from).collect(),
    }
}

fn overall_entry(index: usize, user: &RankedUser) -> OverallEntry {
    OverallEntry {
        rank: index + 1,
        account: user.account.clone(),
        points: user.points,
        consecutive_days: user.consecutive_days,
        total_duration: user.total_duration,
    }
}

impl LeaderboardResponse {
    pub fn from_leaderboard(leaderboard: &Leaderboard, generated_at: DateTime<Utc>) -> Self {
        let weeks = leaderboard
            .weeks
            .iter()
            .map(|(key, ranking)| WeekResponse {
                year: key.year,
                week: key.week,
                label: key.to_string(),
                activity_count: leaderboard
                    .week_activity_counts
                    .get(key)
                    .copied()
                    .unwrap_or_default(),
                ranking: ranking
                    .iter()
                    .enumerate()
                    .map(|(i, u)| weekly_entry(i, u))
                    .collect(),
            })
            .collect();

        let overall = leaderboard
            .overall
            .iter()
            .map(|OverallStanding { top_n, ranking }| OverallResponse {
                top_n: *top_n,
                ranking: ranking
                    .iter()
                    .enumerate()
                    .map(|(i, u)| overall_entry(i, u))
                    .collect(),
            })
            .collect();

        Self {
            has_data: leaderboard.has_data(),
            generated_at: format_utc_rfc3339(generated_at),
            weeks,
            overall,
        }
    }
}

// ─── Handler ─────────────────────────────────────────────────

/// Fetch the challenge's workouts and compute the leaderboard.
///
/// A failed fetch is reported as `has_data: false`, not as an error.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>> {
    let variants = match params.top_n.as_deref() {
        Some(raw) => parse_top_n_variants(raw)?,
        None => state.config.top_n_variants.clone(),
    };

    let activities = state.source.fetch_workouts_or_empty().await;
    let leaderboard = Leaderboard::compute(&activities, &variants)?;

    tracing::info!(
        activities = activities.len(),
        weeks = leaderboard.weeks.len(),
        variants = ?variants,
        "Serving leaderboard"
    );

    Ok(Json(LeaderboardResponse::from_leaderboard(
        &leaderboard,
        Utc::now(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;

    fn make_activity(id: u64, account_id: u64, occurred_at: &str) -> Activity {
        let mut payload = serde_json::Map::new();
        payload.insert("title".to_string(), serde_json::json!(format!("Workout {}", id)));
        Activity {
            id,
            account: Account {
                id: account_id,
                full_name: format!("Athlete {}", account_id),
                profile_picture_url: None,
            },
            occurred_at: occurred_at.to_string(),
            duration: 30.0,
            payload,
        }
    }

    #[test]
    fn test_response_ranks_are_one_based() {
        let activities = vec![
            make_activity(1, 1, "2024-03-11T07:00:00Z"),
            make_activity(2, 1, "2024-03-12T07:00:00Z"),
            make_activity(3, 2, "2024-03-12T07:00:00Z"),
        ];
        let leaderboard = Leaderboard::compute(&activities, &[3]).unwrap();
        let generated_at = DateTime::from_timestamp(1_704_103_200, 0).unwrap();

        let response = LeaderboardResponse::from_leaderboard(&leaderboard, generated_at);

        assert!(response.has_data);
        assert_eq!(response.generated_at, "2024-01-01T10:00:00Z");
        assert_eq!(response.weeks.len(), 1);
        let week = &response.weeks[0];
        assert_eq!(week.label, "2024-W11");
        assert_eq!(week.activity_count, 3);
        assert_eq!(week.ranking[0].rank, 1);
        assert_eq!(week.ranking[0].account.id, 1);
        assert_eq!(week.ranking[0].activities[1].title.as_deref(), Some("Workout 2"));
        assert_eq!(response.overall[0].ranking[1].rank, 2);
        assert_eq!(response.overall[0].ranking[1].points, 2);
    }
}
