use crate::error::{config_error, env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the events backend when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/iljeong.toml";

/// Upper bound for `repeat_horizon_days` (ten years)
pub const MAX_REPEAT_HORIZON_DAYS: i64 = 3650;

/// Main configuration structure for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST backend (the `/api/...` paths are appended)
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Lifetime of ordinary toasts in milliseconds
    pub toast_duration_ms: u64,
    /// Lifetime of the "loaded" toast shown after initialization
    pub loaded_toast_duration_ms: u64,
    /// Locale used for toast and card texts
    pub locale: String,
    /// How far ahead recurring events are generated when no end date is set
    pub repeat_horizon_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 10,
            toast_duration_ms: 3000,
            loaded_toast_duration_ms: 1000,
            locale: "ko".to_string(),
            repeat_horizon_days: 365,
        }
    }
}

/// Optional overrides read from the TOML config file
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub toast_duration_ms: Option<u64>,
    pub loaded_toast_duration_ms: Option<u64>,
    pub locale: Option<String>,
    pub repeat_horizon_days: Option<i64>,
}

impl Config {
    /// Load configuration from `.env`, the environment and the config file
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;

        let path = config_path
            .map(Path::to_path_buf)
            .or_else(|| env::var("ILJEONG_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            config.apply_file(toml::from_str::<FileConfig>(&content)?);
            tracing::debug!("Loaded config overrides from {}", path.display());
        } else if config_path.is_some() {
            return Err(config_error(&format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a config from a variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let parse_u64 = |key: &str, default: u64| -> AppResult<u64> {
            match lookup(key) {
                Some(value) => value.trim().parse::<u64>().map_err(|_| env_error(key)),
                None => Ok(default),
            }
        };

        let repeat_horizon_days = match lookup("ILJEONG_REPEAT_HORIZON_DAYS") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|_| env_error("ILJEONG_REPEAT_HORIZON_DAYS"))?,
            None => defaults.repeat_horizon_days,
        };

        Ok(Self {
            api_base_url: lookup("ILJEONG_API_URL").unwrap_or(defaults.api_base_url),
            request_timeout_secs: parse_u64(
                "ILJEONG_REQUEST_TIMEOUT",
                defaults.request_timeout_secs,
            )?,
            toast_duration_ms: parse_u64("ILJEONG_TOAST_DURATION_MS", defaults.toast_duration_ms)?,
            loaded_toast_duration_ms: defaults.loaded_toast_duration_ms,
            locale: lookup("ILJEONG_LOCALE").unwrap_or(defaults.locale),
            repeat_horizon_days,
        })
    }

    /// Overlay values present in the config file
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(url) = file.api_base_url {
            self.api_base_url = url;
        }
        if let Some(timeout) = file.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(duration) = file.toast_duration_ms {
            self.toast_duration_ms = duration;
        }
        if let Some(duration) = file.loaded_toast_duration_ms {
            self.loaded_toast_duration_ms = duration;
        }
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(days) = file.repeat_horizon_days {
            self.repeat_horizon_days = days;
        }
    }

    /// Reject values the rest of the crate cannot work with
    pub fn validate(&self) -> AppResult<()> {
        url::Url::parse(&self.api_base_url)
            .map_err(|e| config_error(&format!("Invalid api_base_url: {}", e)))?;
        if !(0..=MAX_REPEAT_HORIZON_DAYS).contains(&self.repeat_horizon_days) {
            return Err(config_error(&format!(
                "repeat_horizon_days must be between 0 and {}",
                MAX_REPEAT_HORIZON_DAYS
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn loaded_toast_duration(&self) -> Duration {
        Duration::from_millis(self.loaded_toast_duration_ms)
    }
}
