//! Wire types for the avatar endpoint

use serde::Serialize;
use serde_json::Value;

/// Fields of a `POST /` body, read leniently so that every malformed input
/// still maps to one of the endpoint's own error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarRequest {
    pub account_type: Option<String>,
    pub identifier: Option<String>,
}

impl AvatarRequest {
    /// Pull both fields out of a JSON body.
    ///
    /// Absent and `null` fields are `None`. Non-string values keep their JSON
    /// text, so `"account_type": 7` is an unknown tag rather than a missing one.
    /// A body that is not an object has no fields.
    pub fn from_body(body: &Value) -> Self {
        Self {
            account_type: field_text(body.get("account_type")),
            identifier: field_text(body.get("identifier")),
        }
    }
}

fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub photo: String,
}

impl SuccessResponse {
    pub fn new(photo: String) -> Self {
        Self {
            success: true,
            photo,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: &'static str,
}

impl FailureResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}
