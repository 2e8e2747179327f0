//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honoured for local development.

use std::env;

use crate::services::leaderboard::{parse_top_n_variants, DEFAULT_TOP_N_VARIANTS};

const DEFAULT_API_URL: &str = "https://www.gymrats.app/api";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GymRats challenge whose workouts are ranked
    pub challenge_id: String,
    /// Value sent verbatim in the `Authorization` header (may be empty)
    pub gymrats_token: String,
    /// GymRats API base URL
    pub gymrats_api_url: String,
    /// Read workouts from this JSON file instead of the API (local dev)
    pub activities_file: Option<String>,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Top-N variants computed when a request doesn't ask for specific ones
    pub top_n_variants: Vec<usize>,
    /// Timeout for the one-shot workout fetch
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let top_n_variants = match env::var("TOP_N_VARIANTS") {
            Ok(raw) => parse_top_n_variants(&raw)
                .map_err(|e| ConfigError::Invalid("TOP_N_VARIANTS", e.to_string()))?,
            Err(_) => DEFAULT_TOP_N_VARIANTS.to_vec(),
        };

        let fetch_timeout_secs = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("FETCH_TIMEOUT_SECS", raw.clone()))?,
            Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            challenge_id: env::var("CHALLENGE_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CHALLENGE_ID"))?,
            gymrats_token: env::var("GYMRATS_TOKEN")
                .or_else(|_| env::var("TOKEN"))
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            gymrats_api_url: env::var("GYMRATS_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            activities_file: env::var("ACTIVITIES_FILE").ok().filter(|v| !v.is_empty()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port,
            top_n_variants,
            fetch_timeout_secs,
        })
    }

    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            challenge_id: "test-challenge".to_string(),
            gymrats_token: "test_token".to_string(),
            gymrats_api_url: DEFAULT_API_URL.to_string(),
            activities_file: None,
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            top_n_variants: DEFAULT_TOP_N_VARIANTS.to_vec(),
            fetch_timeout_secs: 2,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so parallel tests don't race on the process environment.
    #[test]
    fn test_config_from_env() {
        env::set_var("CHALLENGE_ID", "4242");
        env::set_var("TOKEN", "legacy_token");
        env::remove_var("GYMRATS_TOKEN");
        env::set_var("GYMRATS_API_URL", "http://localhost:9999/api/");
        env::remove_var("TOP_N_VARIANTS");
        env::remove_var("FETCH_TIMEOUT_SECS");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.challenge_id, "4242");
        assert_eq!(config.gymrats_token, "legacy_token");
        assert_eq!(config.gymrats_api_url, "http://localhost:9999/api");
        assert_eq!(config.top_n_variants, vec![3, 4, 5]);
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.port, 8080);

        env::set_var("PORT", "3001");
        assert_eq!(Config::from_env().expect("Config should load").port, 3001);

        for bad in ["http", "70000", "-1"] {
            env::set_var("PORT", bad);
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::Invalid("PORT", ref raw)) if raw == bad
            ));
        }
        env::remove_var("PORT");

        env::set_var("TOP_N_VARIANTS", "2,6");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.top_n_variants, vec![2, 6]);

        env::set_var("TOP_N_VARIANTS", "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("TOP_N_VARIANTS", _))
        ));
        env::remove_var("TOP_N_VARIANTS");

        env::remove_var("CHALLENGE_ID");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("CHALLENGE_ID"))
        ));
    }
}
