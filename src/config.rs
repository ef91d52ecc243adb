//! Application configuration
//!
//! The base URL of the history service is resolved once at launch and handed
//! to the component tree as a Dioxus context value. Components never read the
//! process environment themselves.

use std::path::PathBuf;
use thiserror::Error;

/// Storage key the login flow writes the JWT under
pub const DEFAULT_CREDENTIAL_KEY: &str = "authToken";

/// Fallback used when no base URL is baked into the web build
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("API base URL is missing")]
    MissingBaseUrl,

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.com`
    pub api_base_url: String,
    /// Key of the persisted credential token
    pub credential_key: String,
    /// Desktop only: directory holding the token file, platform data dir when unset
    pub credential_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let has_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|host| !host.is_empty());
        if !has_scheme {
            return Err(ConfigError::InvalidBaseUrl(raw));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
            credential_key: DEFAULT_CREDENTIAL_KEY.to_string(),
            credential_dir: None,
        })
    }

    pub fn with_credential_key(mut self, key: impl Into<String>) -> Self {
        self.credential_key = key.into();
        self
    }

    pub fn with_credential_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.credential_dir = Some(dir.into());
        self
    }

    /// Config for the web build: base URL fixed at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}
