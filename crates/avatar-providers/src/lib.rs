//! Avatar lookup across unrelated identity providers
//!
//! Given an account type and an identifier, resolves a profile picture URL
//! from one of three providers:
//!
//! - GitHub: `GET https://api.github.com/users/{username}` (`avatar_url`)
//! - Mastodon: `GET https://mastodon.social/api/v1/accounts/lookup?acct={handle}` (`avatar`)
//! - Gravatar: no network call, the URL is derived from the SHA-256 of the email
//!
//! # Example
//!
//! ```no_run
//! use avatar_providers::{AccountType, AvatarResolver, LookupRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = AvatarResolver::with_defaults()?;
//! let request = LookupRequest::new(AccountType::GitHub, "octocat")?;
//!
//! if let Some(url) = resolver.resolve(&request).await.photo() {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod github;
pub mod gravatar;
mod http;
mod mastodon;
mod resolver;
mod types;

pub use error::{Absence, ValidationError};
pub use github::GitHubClient;
pub use http::{build_http_client, DEFAULT_TIMEOUT, USER_AGENT};
pub use mastodon::MastodonClient;
pub use resolver::AvatarResolver;
pub use types::{AccountType, GitHubUser, LookupRequest, LookupResult, MastodonAccount};
