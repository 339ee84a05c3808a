//! Shared outbound HTTP plumbing for the network-backed providers

use crate::error::Absence;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub rejects API requests without a User-Agent
pub const USER_AGENT: &str = concat!("avatar-fetcher/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by every provider
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Issue a single GET and decode the JSON body.
///
/// Non-success statuses and unparsable bodies become an [`Absence`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    accept: &str,
) -> Result<T, Absence> {
    debug!(url = %url, "Fetching provider profile");

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, accept)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Absence::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Treat a null or empty avatar field the same as a missing one
pub(crate) fn non_empty(value: Option<String>) -> Result<String, Absence> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(Absence::MissingAvatar)
}
