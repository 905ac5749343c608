//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for TalentBook
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TalentBookError {
    /// No valid session; nothing was sent to the backend.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The backend answered with an error. Displays the remote message as-is.
    #[error("{0}")]
    RemoteRejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TalentBookError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "authentication_required",
            Self::RemoteRejected(_) => "remote_rejected",
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for TalentBook operations
pub type Result<T> = std::result::Result<T, TalentBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_rejected_displays_remote_message_verbatim() {
        let err = TalentBookError::RemoteRejected("talent not found".to_string());
        assert_eq!(err.to_string(), "talent not found");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(TalentBookError::Network("reset".into())).unwrap();
        assert_eq!(json["type"], "Network");
        assert_eq!(json["message"], "reset");

        let json = serde_json::to_value(TalentBookError::AuthenticationRequired).unwrap();
        assert_eq!(json["type"], "AuthenticationRequired");
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(TalentBookError::AuthenticationRequired.label(), "authentication_required");
        assert_eq!(TalentBookError::RemoteRejected(String::new()).label(), "remote_rejected");
    }
}
