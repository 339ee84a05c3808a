//! Gravatar URL derivation
//!
//! Purely local: the avatar URL is a function of the normalized email.

use sha2::{Digest, Sha256};

pub const GRAVATAR_BASE_URL: &str = "https://gravatar.com/avatar";

/// Requested image size in pixels
pub const GRAVATAR_SIZE: u32 = 400;

/// Trim surrounding whitespace and lowercase
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Lowercase hex SHA-256 of the normalized email
pub fn email_hash(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_email(email).as_bytes());
    hex::encode(hasher.finalize())
}

pub fn avatar_url(email: &str) -> String {
    format!(
        "{}/{}?s={}",
        GRAVATAR_BASE_URL,
        email_hash(email),
        GRAVATAR_SIZE
    )
}
