// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with user-facing messages.

use reqwest::StatusCode;

/// Error returned by gateway dispatch, API operations, and screens.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No response was received (connection refused, DNS, TLS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// A required form field was empty; no request was sent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A form field was present but could not be parsed.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),
}

impl ClientError {
    /// True if this is a local precondition failure caught before dispatch.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ClientError::MissingField(_) | ClientError::InvalidField { .. }
        )
    }

    /// True if the server rejected our credentials (401).
    ///
    /// Callers use this to decide whether to drop the stored token; the
    /// gateway never clears it on its own.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Http { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// HTTP status of a server rejection, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short human-readable description for display next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => "Unable to reach the server".to_string(),
            ClientError::Http { status, body } => match server_detail(body) {
                Some(detail) => detail,
                None if *status == StatusCode::UNAUTHORIZED => {
                    "Your session has expired, please log in again".to_string()
                }
                None if *status == StatusCode::NOT_FOUND => "Not found".to_string(),
                None => format!("Request failed ({})", status.as_u16()),
            },
            ClientError::Decode(_) => "Unexpected response from server".to_string(),
            ClientError::Encode(_) => "Unable to send request".to_string(),
            ClientError::MissingField(field) => format!("{} is required", field),
            ClientError::InvalidField { field, .. } => format!("{} is invalid", field),
            ClientError::Session(_) => "Unable to access saved session".to_string(),
        }
    }
}

/// Extract the `detail` string from an API error body, if present.
///
/// The API reports failures as `{"detail": "..."}`; validation failures use
/// a list under the same key, which is not worth showing verbatim.
fn server_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Session token storage errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Session store lock poisoned")]
    Poisoned,
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
