//! Dispatch a lookup to exactly one provider

use crate::error::ValidationError;
use crate::github::GitHubClient;
use crate::gravatar;
use crate::http::{build_http_client, DEFAULT_TIMEOUT};
use crate::mastodon::MastodonClient;
use crate::types::{AccountType, LookupRequest, LookupResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves avatar URLs for GitHub, Mastodon and Gravatar accounts
pub struct AvatarResolver {
    github: GitHubClient,
    mastodon: MastodonClient,
}

impl AvatarResolver {
    /// Create a resolver against the public GitHub API and mastodon.social
    pub fn with_defaults() -> reqwest::Result<Self> {
        Self::with_base_urls(
            GitHubClient::BASE_URL,
            MastodonClient::BASE_URL,
            DEFAULT_TIMEOUT,
        )
    }

    /// Create a resolver whose providers share one HTTP client
    pub fn with_base_urls(
        github_url: &str,
        mastodon_url: &str,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = build_http_client(timeout)?;

        Ok(Self::new(
            GitHubClient::with_client(http.clone(), github_url),
            MastodonClient::with_client(http, mastodon_url),
        ))
    }

    pub fn new(github: GitHubClient, mastodon: MastodonClient) -> Self {
        Self { github, mastodon }
    }

    /// Resolve a validated request.
    ///
    /// Provider failures never escape: they come back as
    /// [`LookupResult::Absent`] with the reason attached.
    pub async fn resolve(&self, request: &LookupRequest) -> LookupResult {
        let identifier = request.identifier.as_str();

        let outcome = match request.account_type {
            AccountType::GitHub => self.github.fetch_avatar(identifier).await,
            AccountType::Mastodon => self.mastodon.fetch_avatar(identifier).await,
            AccountType::Gravatar => Ok(gravatar::avatar_url(identifier)),
        };

        match &outcome {
            Ok(url) => debug!(
                account_type = %request.account_type,
                identifier,
                url = %url,
                "Resolved avatar"
            ),
            Err(reason) => warn!(
                account_type = %request.account_type,
                identifier,
                error = %reason,
                "Could not fetch avatar"
            ),
        }

        outcome.into()
    }

    /// Validate raw input, then resolve it
    pub async fn resolve_raw(
        &self,
        account_type: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<LookupResult, ValidationError> {
        let request = LookupRequest::parse(account_type, identifier)?;
        Ok(self.resolve(&request).await)
    }
}
