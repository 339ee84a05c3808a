//! Error types for avatar lookups

use std::fmt;

/// Rejected lookup input. Never reaches a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `account_type` or `identifier` was absent or empty
    Missing,
    /// `account_type` is not one of github, gravatar, mastodon
    InvalidAccountType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Missing account_type or identifier"),
            Self::InvalidAccountType(tag) => write!(f, "Invalid account_type: {}", tag),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a provider produced no avatar.
///
/// Callers outside this crate only ever see "no avatar"; the reason is kept
/// for logging.
#[derive(Debug)]
pub enum Absence {
    /// Network or transport failure, including timeouts
    Http(Box<reqwest::Error>),
    /// Provider answered with a non-success status
    Status(u16),
    /// Response body was not the expected JSON
    Decode(serde_json::Error),
    /// JSON parsed but carried no usable avatar field
    MissingAvatar,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::Status(code) => write!(f, "Provider returned status {}", code),
            Self::Decode(e) => write!(f, "JSON parse error: {}", e),
            Self::MissingAvatar => write!(f, "No avatar in provider response"),
        }
    }
}

impl std::error::Error for Absence {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Absence {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

impl From<serde_json::Error> for Absence {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}
