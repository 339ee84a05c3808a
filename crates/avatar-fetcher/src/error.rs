//! Error types for the avatar fetcher service

use crate::types::FailureResponse;
use avatar_providers::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::fmt;

/// Startup and configuration failures
#[derive(Debug)]
pub enum AvatarFetcherError {
    Config(String),
    Io(Box<std::io::Error>),
}

impl fmt::Display for AvatarFetcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarFetcherError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AvatarFetcherError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for AvatarFetcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AvatarFetcherError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AvatarFetcherError {
    fn from(err: std::io::Error) -> Self {
        AvatarFetcherError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for AvatarFetcherError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AvatarFetcherError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for AvatarFetcherError {
    fn from(err: reqwest::Error) -> Self {
        AvatarFetcherError::Config(format!("Failed to build HTTP client: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AvatarFetcherError>;

/// Request failures, rendered as the `{ success: false, message }` envelope.
///
/// Every variant is a 400. Provider failures all collapse into
/// `CouldNotFetch` regardless of which provider failed or why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    Missing,
    InvalidAccountType,
    CouldNotFetch,
}

impl ApiError {
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Missing => "Missing account_type or identifier",
            ApiError::InvalidAccountType => "Invalid account_type",
            ApiError::CouldNotFetch => "Could not fetch the profile image",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Missing => ApiError::Missing,
            ValidationError::InvalidAccountType(_) => ApiError::InvalidAccountType,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(FailureResponse::new(self.message())),
        )
            .into_response()
    }
}
