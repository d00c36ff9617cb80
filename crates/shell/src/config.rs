//! Shell configuration, read from the environment.

use std::path::PathBuf;
use std::time::Duration;

pub const API_URL_VAR: &str = "ROOTMANAGE_API_URL";
pub const STATE_FILE_VAR: &str = "ROOTMANAGE_STATE_FILE";
pub const HTTP_TIMEOUT_VAR: &str = "ROOTMANAGE_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Backend base URL; resource paths are appended to it.
    pub api_url: String,
    /// File the session is persisted to.
    pub state_file: PathBuf,
    /// Per-request timeout. `None` waits indefinitely.
    pub http_timeout: Option<Duration>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ROOTMANAGE_HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let state_file = lookup(STATE_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_state_file);

        let http_timeout = match lookup(HTTP_TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Self {
            api_url,
            state_file,
            http_timeout,
        })
    }
}

/// `<data dir>/rootmanage/session.json`, or a file in the working directory
/// when the platform has no data directory.
pub fn default_state_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rootmanage").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("rootmanage-session.json"))
}
