//! Client error types

use crate::types::ErrorBody;
use std::fmt;
use thiserror::Error;

/// What the server sent back with a failed response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorMessage {
    /// `msg` of a JSON `{ "msg": ... }` body
    Backend(String),
    /// Any other body, or the status reason phrase when the body was empty
    Raw(String),
}

impl ErrorMessage {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backend(message) | Self::Raw(message) => message,
        }
    }

    /// The backend's own `msg`, if the body carried one
    pub fn backend(&self) -> Option<&str> {
        match self {
            Self::Backend(message) => Some(message),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        Self::Backend(message.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        Self::Backend(message)
    }
}

impl PartialEq<str> for ErrorMessage {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

/// Client error types
///
/// Cloneable so that one failed fetch can be handed to every caller that was
/// waiting on it.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(String),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: ErrorMessage },

    /// Authentication failed or the session expired
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(ErrorMessage),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(ErrorMessage),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(ErrorMessage),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(ErrorMessage),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body
    ///
    /// A JSON body of the form `{ "msg": "..." }` is unwrapped to its message;
    /// anything else is kept as [`ErrorMessage::Raw`].
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { msg }) => ErrorMessage::Backend(msg),
            Err(_) if body.trim().is_empty() => ErrorMessage::Raw(
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            ),
            Err(_) => ErrorMessage::Raw(body),
        };

        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Whether the backend rejected the session (401)
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Whatever the server sent with the failure, if the server answered
    pub fn response_message(&self) -> Option<&ErrorMessage> {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => Some(message),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// The backend's `msg`; `None` for transport failures and for bodies
    /// that were not a JSON error document
    pub fn server_message(&self) -> Option<&str> {
        self.response_message().and_then(ErrorMessage::backend)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
