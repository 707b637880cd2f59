//! Error types for the TE-Canvas front.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every layer of the front.
///
/// Read failures against the backend never surface as this type to callers of
/// [`crate::connection::BackendClient`]; they are recovered inside the client.
/// The variants here are the ones that cross a layer boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TecanvasError {
    /// A connection token did not contain the separator.
    #[error("Malformed connection token: '{token}'")]
    MalformedToken { token: String },

    /// A submitted form did not have the shape the view template produces.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// HTTP transport error talking to the backend
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization error
    #[error("Decode error: {format} - {message}")]
    Decode { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TecanvasError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MalformedToken error
    pub fn malformed_token(token: impl Into<String>) -> Self {
        Self::MalformedToken {
            token: token.into(),
        }
    }

    /// Creates an InvariantViolation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a MalformedToken error
    pub fn is_malformed_token(&self) -> bool {
        matches!(self, Self::MalformedToken { .. })
    }

    /// Check if this is an InvariantViolation error
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<serde_json::Error> for TecanvasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TecanvasError>`.
pub type Result<T> = std::result::Result<T, TecanvasError>;
