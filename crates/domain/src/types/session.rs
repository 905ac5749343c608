//! Session types read from the auth provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Current session. Only the access token is needed by the commit path.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token: None, expires_at: None, user: None }
    }

    /// A session is usable when it carries a non-blank token that has not
    /// expired at `now`. Sessions without an expiry never expire.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        if self.access_token.trim().is_empty() {
            return false;
        }
        self.expires_at.map_or(true, |expires_at| expires_at > now.timestamp())
    }
}

// Tokens stay out of logs
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}
