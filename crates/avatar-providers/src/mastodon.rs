//! Mastodon account lookup client
//!
//! Lookups always go to one fixed instance. Handles of the form
//! `user@other.instance` are passed through as-is and the instance decides
//! whether it can resolve them.

use crate::error::Absence;
use crate::http::{build_http_client, get_json, non_empty, DEFAULT_TIMEOUT};
use crate::types::MastodonAccount;
use reqwest::Client;

/// Looks up avatars through `GET /api/v1/accounts/lookup?acct={handle}`
pub struct MastodonClient {
    http: Client,
    base_url: String,
}

impl MastodonClient {
    /// Instance every lookup is sent to
    pub const BASE_URL: &'static str = "https://mastodon.social";

    pub fn new() -> reqwest::Result<Self> {
        Self::with_base_url(Self::BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> reqwest::Result<Self> {
        Ok(Self::with_client(build_http_client(DEFAULT_TIMEOUT)?, base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self, acct: &str) -> String {
        format!(
            "{}/api/v1/accounts/lookup?acct={}",
            self.base_url,
            urlencoding::encode(acct)
        )
    }

    /// Fetch the `avatar` field for an account handle
    pub async fn fetch_avatar(&self, acct: &str) -> Result<String, Absence> {
        let account: MastodonAccount =
            get_json(&self.http, &self.lookup_url(acct), "application/json").await?;
        non_empty(account.avatar)
    }
}
