//! Server configuration
//!
//! Built once at startup from the deployment's secret store.
//! Every key is optional and falls back to the defaults below.

use std::time::Duration;

use reqwest::Url;
use shopscout::SearchQuery;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.amazon.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const KEY_BASE_URL: &str = "SEARCH_BASE_URL";
const KEY_USER_AGENT: &str = "SEARCH_USER_AGENT";
const KEY_TIMEOUT_SECS: &str = "SEARCH_TIMEOUT_SECS";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Configuration for the search endpoint's outbound requests
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Scheme and host of the search site, without a trailing slash
    pub search_base_url: String,
    /// Sent as the `User-Agent` header of every outbound request
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            search_base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Build from a key lookup such as `SecretStore::get`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(KEY_BASE_URL) {
            config = config.with_base_url(validate_base_url(&base_url)?);
        }

        if let Some(user_agent) = lookup(KEY_USER_AGENT) {
            let user_agent = user_agent.trim();
            if user_agent.is_empty() {
                return Err(ConfigError::invalid(KEY_USER_AGENT, "must not be empty"));
            }
            config.user_agent = user_agent.to_string();
        }

        if let Some(secs) = lookup(KEY_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(KEY_TIMEOUT_SECS, format!("{secs:?}: {e}")))?;
            if secs == 0 {
                return Err(ConfigError::invalid(
                    KEY_TIMEOUT_SECS,
                    "must be greater than 0",
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the search site (used to point at a local mock in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.search_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Results page URL for a query: `{base}/s?k={keywords}`
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/s?k={}", self.search_base_url, query.keywords())
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid(KEY_BASE_URL, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(ConfigError::invalid(
            KEY_BASE_URL,
            format!("unsupported scheme '{other}'"),
        )),
    }
}
