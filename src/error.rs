//! Error Types
//!
//! Failures surfaced to the user. Every variant renders as a message that
//! can go straight into an alert.

use std::collections::BTreeMap;

use thiserror::Error;

/// Failure of a call to the Cookfarm API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never completed (server down, CORS, offline)
    #[error("A problem occurred while communicating with the server.")]
    Network(String),
    /// Non-2xx response
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Mutating action attempted without a session
    #[error("Login required.")]
    NotLoggedIn,
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Extract a human-readable message from a rejected response body.
///
/// Prefers a JSON `message` field, then the raw text, then the status code.
pub fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(serde_json::Value::String(message)) = map.get("message") {
            if !message.trim().is_empty() {
                return message.trim().to_string();
            }
        }
    }
    let text = body.trim();
    if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        text.to_string()
    }
}

/// Local storage failure; logged, never shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("could not encode `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

/// Form field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Name,
    AddedDate,
    ExpiryDate,
    Note,
}

/// Client-side validation messages, keyed by field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message in field order, for alerts
    pub fn first(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}
