use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://the-trivia-api.com/v2/questions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const API_URL_VAR: &str = "QUIZ_API_URL";
const TIMEOUT_VAR: &str = "QUIZ_HTTP_TIMEOUT_SECS";
const CONFIRM_RESET_VAR: &str = "QUIZ_CONFIRM_RESET";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub confirm_reset: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            confirm_reset: true,
        }
    }
}

impl QuizConfig {
    /// Read `QUIZ_API_URL`, `QUIZ_HTTP_TIMEOUT_SECS` and `QUIZ_CONFIRM_RESET`.
    ///
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(API_URL_VAR) {
            config = config.with_api_url(raw)?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout = parse_timeout(TIMEOUT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(CONFIRM_RESET_VAR) {
            config.confirm_reset = parse_flag(CONFIRM_RESET_VAR, &raw)?;
        }

        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Empty` for a blank url.
    pub fn with_api_url(mut self, raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Empty { name: API_URL_VAR });
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_confirm_reset(mut self, confirm_reset: bool) -> Self {
        self.confirm_reset = confirm_reset;
        self
    }
}

/// Parse a whole number of seconds; zero is rejected.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` when the value is not a positive integer.
pub fn parse_timeout(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            name,
            raw: raw.to_string(),
        }),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            raw: raw.to_string(),
        }),
    }
}
