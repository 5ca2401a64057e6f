//! Client configuration.
//!
//! Built from the environment with [`ClientConfig::from_env`], then
//! adjusted by command-line flags through the `with_*` builders.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::error::{GameError, SessionError};

pub const ENV_API_URL: &str = "TRILUNA_API_URL";
pub const ENV_DATA_DIR: &str = "TRILUNA_DATA_DIR";
pub const ENV_NO_STREAM: &str = "TRILUNA_NO_STREAM";

/// Data directory name under the home directory.
const DATA_DIR_NAME: &str = ".triluna";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL
    pub api_url: String,
    /// Holds `session.json`, `history` and `triluna.log`
    pub data_dir: PathBuf,
    /// Use the streaming turn endpoint (default: true)
    pub streaming: bool,
    /// World clock refresh interval while in game (default: 30)
    pub clock_poll_secs: u64,
    /// Timeout for request/response calls; the turn stream is exempt
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Defaults rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: data_dir.into(),
            streaming: true,
            clock_poll_secs: 30,
            request_timeout_secs: 30,
        }
    }

    /// Read `TRILUNA_API_URL`, `TRILUNA_DATA_DIR` and `TRILUNA_NO_STREAM`.
    ///
    /// Fails only when no data directory is set and there is no home
    /// directory to default to.
    pub fn from_env() -> Result<Self, GameError> {
        let data_dir = match non_empty_var(ENV_DATA_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .map(|home| home.join(DATA_DIR_NAME))
                .ok_or(SessionError::NoDataDir)?,
        };

        let mut config = Self::new(data_dir);
        if let Some(url) = non_empty_var(ENV_API_URL) {
            config = config.with_api_url(url)?;
        }
        if let Some(flag) = non_empty_var(ENV_NO_STREAM) {
            config.streaming = !is_truthy(&flag);
        }
        Ok(config)
    }

    /// Set the backend URL. Must be http(s).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, GameError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(GameError::Config {
                message: format!("API URL must start with http:// or https://: '{}'", url),
            });
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    pub fn with_clock_poll_secs(mut self, secs: u64) -> Self {
        self.clock_poll_secs = secs.max(1);
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn clock_poll_interval(&self) -> Duration {
        Duration::from_secs(self.clock_poll_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
