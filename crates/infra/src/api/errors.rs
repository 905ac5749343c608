//! Backend API error types
//!
//! Classifies backend failures and carries the remote message extracted from
//! the response body.

use std::time::Duration;

use talentbook_domain::TalentBookError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors
    Config,
    /// The backend answered 2xx with a body we could not read
    Decode,
}

/// API operation errors
///
/// Status variants display only the remote message, which is what callers
/// show to users.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    RateLimit(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
            Self::Decode(_) => ApiErrorCategory::Decode,
        }
    }

    /// Whether the backend itself answered with an error status
    pub fn is_remote_rejection(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Client
        )
    }
}

impl From<ApiError> for TalentBookError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message)
            | ApiError::RateLimit(message)
            | ApiError::Server(message)
            | ApiError::Client(message) => TalentBookError::RemoteRejected(message),
            ApiError::Network(message) => TalentBookError::Network(message),
            ApiError::Timeout(after) => {
                TalentBookError::Network(format!("request timed out after {after:?}"))
            }
            ApiError::Config(message) => TalentBookError::Config(message),
            ApiError::Decode(message) => TalentBookError::Internal(message),
        }
    }
}

/// Convert from the transport's domain error to ApiError
impl From<TalentBookError> for ApiError {
    fn from(err: TalentBookError) -> Self {
        match err {
            TalentBookError::Network(message) => Self::Network(message),
            TalentBookError::Config(message) => Self::Config(message),
            TalentBookError::AuthenticationRequired => Self::Auth("Authentication required".to_string()),
            TalentBookError::RemoteRejected(message) => Self::Client(message),
            TalentBookError::InvalidInput(message) | TalentBookError::NotFound(message) => {
                Self::Client(message)
            }
            TalentBookError::Internal(message) => Self::Decode(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Auth("test".to_string()).category(), ApiErrorCategory::Authentication);
        assert_eq!(ApiError::RateLimit("test".to_string()).category(), ApiErrorCategory::RateLimit);
        assert_eq!(ApiError::Server("test".to_string()).category(), ApiErrorCategory::Server);
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(1)).category(),
            ApiErrorCategory::Network
        );
    }

    #[test]
    fn status_errors_display_remote_message_only() {
        assert_eq!(ApiError::Client("year out of range".into()).to_string(), "year out of range");
    }

    #[test]
    fn status_errors_become_remote_rejections() {
        for err in [
            ApiError::Auth("jwt expired".into()),
            ApiError::RateLimit("slow down".into()),
            ApiError::Server("boom".into()),
            ApiError::Client("bad".into()),
        ] {
            assert!(err.is_remote_rejection());
            let message = err.to_string();
            assert_eq!(TalentBookError::from(err), TalentBookError::RemoteRejected(message));
        }
    }

    #[test]
    fn transport_errors_become_network_errors() {
        assert!(!ApiError::Network("reset".into()).is_remote_rejection());
        assert_eq!(
            TalentBookError::from(ApiError::Network("reset".into())),
            TalentBookError::Network("reset".into())
        );
        assert!(matches!(
            TalentBookError::from(ApiError::Timeout(Duration::from_secs(30))),
            TalentBookError::Network(_)
        ));
    }
}
