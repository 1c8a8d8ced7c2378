use std::time::Duration;

use thiserror::Error;

pub const EVENT_API_URL_VAR: &str = "EVENTMOBI_EVENT_API_URL";
pub const API_KEY_VAR: &str = "EVENTMOBI_API_KEY";
pub const TIMEOUT_SECS_VAR: &str = "EVENTMOBI_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Appended to every resource location before it is requested.
pub const JSON_SUFFIX: &str = ".json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("failed to build HTTP client")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventmobiConfig {
    pub event_api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl EventmobiConfig {
    pub fn new(event_api_url: impl Into<String>) -> Self {
        Self {
            event_api_url: event_api_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("conference-fetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = var(EVENT_API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(EVENT_API_URL_VAR))?;
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: EVENT_API_URL_VAR,
                value: url.to_string(),
            });
        }

        let mut config = Self::new(url);
        if let Some(key) = var(API_KEY_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_key(key.trim());
        }
        if let Some(secs) = var(TIMEOUT_SECS_VAR) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid {
                    var: TIMEOUT_SECS_VAR,
                    value: secs.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn event_url(&self) -> String {
        format!("{}{}", self.event_api_url, JSON_SUFFIX)
    }
}
