//! Client configuration loaded from environment variables.
//!
//! Only two things are configurable: the API origin every resource path is
//! resolved against, and the directory holding the persisted session token.

use std::env;
use std::path::PathBuf;

/// Default API origin (the dev server proxies `/api` to the backend).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5173/api";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for all resource paths (no trailing slash)
    pub api_base_url: String,
    /// Directory holding the persisted session token
    pub session_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_dir: env::temp_dir().join("ecotrack-test"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local
    /// development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("ECOTRACK_API_BASE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "ECOTRACK_API_BASE_URL",
                value: api_base_url,
            });
        }

        let session_dir = match env::var("ECOTRACK_SESSION_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .ok_or(ConfigError::Missing("ECOTRACK_SESSION_DIR"))?
                .join("ecotrack"),
        };

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            session_dir,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
