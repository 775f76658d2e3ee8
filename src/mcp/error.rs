//! Error types for the PrismHR MCP relay.
//!
//! This module contains the error enum shared by the authenticator, the relay and the
//! MCP surface. It provides:
//! - `PrismError`: every failure a tool call can run into
//! - Conversions from `reqwest`, `reqwest_middleware` and `serde_json` errors
//! - Conversion to RMCP's `ErrorData` for protocol-level failures
//! - `into_error_body` for the `{"error": ...}` objects returned to agents

use reqwest::StatusCode;
use rmcp::{ErrorData, model::ErrorCode};
use serde_json::{Value, json};
use thiserror::Error;

/// Maximum length for upstream error bodies echoed back in messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum PrismError {
    #[error("Missing PrismHR credentials")]
    MissingCredentials,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("{0}")]
    InvalidParams(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PrismError {
    /// Builds a `Status` error, truncating large upstream bodies.
    #[must_use]
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let body = if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let cut = (0..=MAX_ERROR_BODY_LENGTH)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            let head = body.get(..cut).unwrap_or_default();
            format!("{head}... (truncated, {} total bytes)", body.len())
        };
        Self::Status { status, body }
    }

    /// Whether the upstream rejected the session itself.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == StatusCode::UNAUTHORIZED,
            Self::Http(e) => e.status() == Some(StatusCode::UNAUTHORIZED),
            _ => false,
        }
    }

    /// Message shown to the agent for a failed call to the tool titled `title`.
    ///
    /// Precondition failures keep their fixed wording; transport and upstream failures are
    /// prefixed with the operation title, e.g. `Get employee list failed: ...`.
    #[must_use]
    pub fn describe(&self, title: &str) -> String {
        match self {
            Self::MissingCredentials | Self::AuthenticationFailed | Self::InvalidParams(_) => {
                self.to_string()
            }
            other => format!("{title} failed: {other}"),
        }
    }

    /// The `{"error": ...}` object returned in place of an upstream body.
    #[must_use]
    pub fn into_error_body(self, title: &str) -> Value {
        json!({ "error": self.describe(title) })
    }
}

impl From<PrismError> for ErrorData {
    fn from(err: PrismError) -> Self {
        match err {
            PrismError::InvalidParams(msg) => Self::new(ErrorCode::INVALID_PARAMS, msg, None),
            PrismError::UnknownTool(name) => Self::new(
                ErrorCode::INVALID_PARAMS,
                format!("Unknown tool: {name}"),
                None,
            ),
            PrismError::Http(e) => {
                Self::new(ErrorCode::INTERNAL_ERROR, format!("HTTP error: {e}"), None)
            }
            PrismError::HttpMiddleware(e) => Self::new(
                ErrorCode::INTERNAL_ERROR,
                format!("HTTP middleware error: {e}"),
                None,
            ),
            other => Self::new(ErrorCode::INTERNAL_ERROR, other.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_errors_keep_fixed_wording() {
        assert_eq!(
            PrismError::MissingCredentials.into_error_body("Get employee"),
            json!({ "error": "Missing PrismHR credentials" })
        );
        assert_eq!(
            PrismError::AuthenticationFailed.into_error_body("Get employee"),
            json!({ "error": "Authentication failed" })
        );
    }

    #[test]
    fn upstream_errors_are_prefixed_with_title() {
        let err = PrismError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            err.describe("Get employee list"),
            "Get employee list failed: HTTP status 500 Internal Server Error: boom"
        );
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(2_000);
        let PrismError::Status { body, .. } = PrismError::from_status(StatusCode::BAD_GATEWAY, &body)
        else {
            unreachable!("from_status always builds a Status error");
        };
        assert!(body.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(body.ends_with("(truncated, 2000 total bytes)"));
    }

    #[test]
    fn unauthorized_status_is_detected() {
        assert!(PrismError::from_status(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(!PrismError::from_status(StatusCode::NOT_FOUND, "").is_unauthorized());
        assert!(!PrismError::AuthenticationFailed.is_unauthorized());
    }
}
