use crate::error::{AvatarFetcherError, Result};
use avatar_providers::{GitHubClient, MastodonClient, DEFAULT_TIMEOUT};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub request_timeout: Duration,
    pub github_api_url: String,
    pub mastodon_url: String,
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            request_timeout: DEFAULT_TIMEOUT,
            github_api_url: GitHubClient::BASE_URL.to_string(),
            mastodon_url: MastodonClient::BASE_URL.to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Parse configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Parse configuration from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = parse_var(&var, "PORT")?.unwrap_or(defaults.port);

        let timeout_secs: Option<u64> = parse_var(&var, "REQUEST_TIMEOUT_SECS")?;
        let request_timeout = timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let github_api_url = var("GITHUB_API_URL").unwrap_or(defaults.github_api_url);
        let mastodon_url = var("MASTODON_URL").unwrap_or(defaults.mastodon_url);

        let json_logs = var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

        Ok(Self {
            port,
            request_timeout,
            github_api_url,
            mastodon_url,
            json_logs,
        })
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AvatarFetcherError::Config(format!("invalid {}: {:?}", key, raw))),
    }
}
