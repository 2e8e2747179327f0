// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors raised by the leaderboard computation itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Invalid occurred_at {value:?} on activity {activity_id}")]
    InvalidTimestamp { activity_id: u64, value: String },

    #[error("Invalid top-N list: {0}")]
    InvalidTopN(String),
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid activity data: {0}")]
    InvalidActivityData(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LeaderboardError> for AppError {
    fn from(err: LeaderboardError) -> Self {
        match err {
            LeaderboardError::InvalidTopN(msg) => AppError::BadRequest(msg),
            err @ LeaderboardError::InvalidTimestamp { .. } => {
                AppError::InvalidActivityData(err.to_string())
            }
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::InvalidActivityData(msg) => {
                tracing::error!(error = %msg, "Rejecting malformed activity data");
                (
                    StatusCode::BAD_GATEWAY,
                    "invalid_activity_data",
                    Some(msg.clone()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
