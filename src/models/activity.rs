// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout activity model as returned by the GymRats API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::LeaderboardError;
use crate::time_utils::parse_rfc3339;

/// GymRats account ID.
pub type AccountId = u64;

/// A single workout logged in a challenge.
///
/// Only `id`, `account`, `occurred_at` and `duration` are read by the
/// leaderboard. Everything else the API sends (title, media, calories, ...)
/// lands in `payload` and is passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// GymRats workout ID
    pub id: u64,
    /// Account that logged the workout
    pub account: Account,
    /// When the workout happened (RFC 3339, with the athlete's offset).
    /// Missing or null reads as empty and fails later as an invalid timestamp.
    #[serde(default, deserialize_with = "null_as_default")]
    pub occurred_at: String,
    /// Duration in minutes; missing or null counts as 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,
    /// Remaining API fields, never inspected by the ranking code
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl Activity {
    /// Parse `occurred_at`, keeping the offset it was recorded with.
    pub fn occurred_at_time(&self) -> Result<DateTime<FixedOffset>, LeaderboardError> {
        parse_rfc3339(&self.occurred_at).ok_or_else(|| LeaderboardError::InvalidTimestamp {
            activity_id: self.id,
            value: self.occurred_at.clone(),
        })
    }

    /// Workout title, if the payload carries one.
    pub fn title(&self) -> Option<&str> {
        self.payload.get("title").and_then(|v| v.as_str())
    }
}

/// Deserialize `null` as the type's default instead of rejecting the body.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Challenge participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Account {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: AccountId,
    pub full_name: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}
