// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GymRats API client for fetching a challenge's workouts.
//!
//! The fetch is one-shot: no retries, no caching. Callers that only want
//! something to rank use `fetch_workouts_or_empty`, which turns every
//! failure into an empty list.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::models::Activity;
use serde::Deserialize;

/// Failures talking to, or decoding data from, the GymRats API.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP client build failed: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Workouts endpoint response body.
#[derive(Debug, Deserialize)]
pub struct WorkoutsResponse {
    pub data: Vec<Activity>,
}

/// GymRats API client.
#[derive(Clone)]
pub struct GymRatsClient {
    http: reqwest::Client,
    base_url: String,
    challenge_id: String,
    token: String,
    /// Offline mode: serve these workouts instead of calling the API
    fixture: Option<Arc<Vec<Activity>>>,
}

impl GymRatsClient {
    /// Create a client for the configured challenge.
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.gymrats_api_url.clone(),
            challenge_id: config.challenge_id.clone(),
            token: config.gymrats_token.clone(),
            fixture: None,
        })
    }

    /// Create an offline client that always returns `activities`.
    pub fn from_fixture(activities: Vec<Activity>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: String::new(),
            challenge_id: "fixture".to_string(),
            token: String::new(),
            fixture: Some(Arc::new(activities)),
        }
    }

    /// Create an offline client from a saved workouts response.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let json = fs::read_to_string(path.as_ref()).map_err(|e| SourceError::Io {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        let activities = parse_workouts(&json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = activities.len(),
            "Loaded workouts from file"
        );
        Ok(Self::from_fixture(activities))
    }

    fn workouts_url(&self) -> String {
        format!("{}/challenges/{}/workouts", self.base_url, self.challenge_id)
    }

    /// Fetch all workouts for the challenge.
    pub async fn fetch_workouts(&self) -> Result<Vec<Activity>, SourceError> {
        if let Some(fixture) = &self.fixture {
            return Ok(fixture.as_ref().clone());
        }

        let url = self.workouts_url();
        tracing::debug!(url = %url, "Fetching workouts");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.token)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: WorkoutsResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        tracing::info!(
            challenge_id = %self.challenge_id,
            count = body.data.len(),
            "Fetched workouts"
        );
        Ok(body.data)
    }

    /// Fetch workouts, treating any failure as "no data".
    pub async fn fetch_workouts_or_empty(&self) -> Vec<Activity> {
        match self.fetch_workouts().await {
            Ok(activities) => activities,
            Err(e) => {
                tracing::warn!(
                    challenge_id = %self.challenge_id,
                    error = %e,
                    "Workout fetch failed, ranking no data"
                );
                Vec::new()
            }
        }
    }
}

/// Decode a workouts response body.
pub fn parse_workouts(json: &str) -> Result<Vec<Activity>, SourceError> {
    serde_json::from_str::<WorkoutsResponse>(json)
        .map(|r| r.data)
        .map_err(|e| SourceError::Decode(e.to_string()))
}
