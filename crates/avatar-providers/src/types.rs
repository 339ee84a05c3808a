//! Lookup types and provider response payloads

use crate::error::{Absence, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which provider an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// GitHub username
    GitHub,
    /// Email address
    Gravatar,
    /// Account handle on mastodon.social
    Mastodon,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Gravatar => "gravatar",
            Self::Mastodon => "mastodon",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::GitHub),
            "gravatar" => Ok(Self::Gravatar),
            "mastodon" => Ok(Self::Mastodon),
            other => Err(ValidationError::InvalidAccountType(other.to_string())),
        }
    }
}

/// A validated lookup: known account type and non-empty identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub account_type: AccountType,
    pub identifier: String,
}

impl LookupRequest {
    pub fn new(
        account_type: AccountType,
        identifier: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(ValidationError::Missing);
        }
        Ok(Self {
            account_type,
            identifier,
        })
    }

    /// Validate raw input as it arrives over the wire.
    ///
    /// Presence is checked before the account type, so a request that is
    /// missing its identifier reports `Missing` even if the tag is unknown.
    pub fn parse(
        account_type: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let (account_type, identifier) = match (account_type, identifier) {
            (Some(a), Some(i)) if !a.is_empty() && !i.is_empty() => (a, i),
            _ => return Err(ValidationError::Missing),
        };

        Self::new(account_type.parse()?, identifier)
    }
}

/// Outcome of a single avatar lookup
#[derive(Debug)]
pub enum LookupResult {
    Found(String),
    Absent(Absence),
}

impl LookupResult {
    pub fn photo(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            Self::Absent(_) => None,
        }
    }

    pub fn into_photo(self) -> Option<String> {
        match self {
            Self::Found(url) => Some(url),
            Self::Absent(_) => None,
        }
    }
}

impl From<Result<String, Absence>> for LookupResult {
    fn from(outcome: Result<String, Absence>) -> Self {
        match outcome {
            Ok(url) => Self::Found(url),
            Err(reason) => Self::Absent(reason),
        }
    }
}

/// Subset of GitHub's `GET /users/{username}` response
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub avatar_url: Option<String>,
}

/// Subset of Mastodon's `GET /api/v1/accounts/lookup` response
#[derive(Debug, Clone, Deserialize)]
pub struct MastodonAccount {
    pub avatar: Option<String>,
}
