//! Avatar Fetcher - profile picture lookup service
//!
//! Resolves an avatar URL for a GitHub username, Mastodon handle or
//! Gravatar email behind a single POST endpoint.

use avatar_fetcher::{start_server, Config, Result, ServerState, SharedState};
use avatar_providers::AvatarResolver;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("avatar_fetcher=info".parse()?)
        .add_directive("avatar_providers=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Avatar Fetcher...");
    info!("Port: {}", config.port);
    info!("GitHub API: {}", config.github_api_url);
    info!("Mastodon instance: {}", config.mastodon_url);
    info!("Request timeout: {:?}", config.request_timeout);

    let resolver = AvatarResolver::with_base_urls(
        &config.github_api_url,
        &config.mastodon_url,
        config.request_timeout,
    )?;

    let state: SharedState = Arc::new(ServerState::new(resolver));

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}
