//! GitHub public user API client

use crate::error::Absence;
use crate::http::{build_http_client, get_json, non_empty, DEFAULT_TIMEOUT};
use crate::types::GitHubUser;
use reqwest::Client;

/// Looks up avatars through `GET /users/{username}`
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Public GitHub REST API
    pub const BASE_URL: &'static str = "https://api.github.com";

    const ACCEPT: &'static str = "application/vnd.github+json";

    /// Create a client against api.github.com with the default timeout
    pub fn new() -> reqwest::Result<Self> {
        Self::with_base_url(Self::BASE_URL)
    }

    /// Create a client against a different API root (GitHub Enterprise, tests)
    pub fn with_base_url(base_url: &str) -> reqwest::Result<Self> {
        Ok(Self::with_client(build_http_client(DEFAULT_TIMEOUT)?, base_url))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    /// Fetch `avatar_url` for a username
    pub async fn fetch_avatar(&self, username: &str) -> Result<String, Absence> {
        let user: GitHubUser = get_json(&self.http, &self.user_url(username), Self::ACCEPT).await?;
        non_empty(user.avatar_url)
    }
}
