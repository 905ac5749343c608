//! Port interfaces for the auth session provider
//!
//! The session is passed in explicitly wherever it is needed; the core only
//! ever reads it.

use async_trait::async_trait;
use talentbook_domain::{AuthUser, Result, Session};

/// Trait for reading the current session
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Current session, or `None` when signed out
    async fn session(&self) -> Result<Option<Session>>;

    /// Current user, or `None` when signed out
    async fn user(&self) -> Result<Option<AuthUser>>;
}
