//! Runtime configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. Command-line flags override both.

use crate::error::{ApiError, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.genius.com";

const API_KEY_VAR: &str = "GENIUS_API_KEY";
const API_URL_VAR: &str = "GENIUS_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Genius client access token, sent as a bearer token
    pub api_key: Option<String>,
    /// Base URL of the Genius REST API
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and the environment
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }

        config
    }

    /// Apply a key given on the command line
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        self
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(ApiError::MissingApiKey)
    }
}
