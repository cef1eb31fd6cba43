//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default debate length when a request does not specify one.
pub const DEFAULT_DURATION_HOURS: u32 = 24;
/// Longest debate a creator may request (30 days).
pub const MAX_DURATION_HOURS: u32 = 720;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Directory for the JSON collection files; `None` keeps records in memory only
    pub data_dir: Option<PathBuf>,
    /// Debate length used when `durationHours` is omitted
    pub default_duration_hours: u32,
}

impl Config {
    /// Config for tests: in-memory store, default durations.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            data_dir: None,
            default_duration_hours: DEFAULT_DURATION_HOURS,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let default_duration_hours = match env::var("DEFAULT_DURATION_HOURS") {
            Ok(raw) => parse_duration_hours(&raw)
                .ok_or(ConfigError::Invalid("DEFAULT_DURATION_HOURS", raw))?,
            Err(_) => DEFAULT_DURATION_HOURS,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            data_dir: env::var("DATA_DIR")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            default_duration_hours,
        })
    }
}

fn parse_duration_hours(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|hours| (1..=MAX_DURATION_HOURS).contains(hours))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
