//! Session providers backed by the hosted auth service
//!
//! [`AuthClient`] signs in with email/password against `/auth/v1` and keeps
//! the resulting session in memory. [`StaticSessionProvider`] wraps a
//! session obtained elsewhere.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use talentbook_core::SessionProvider;
use talentbook_domain::{AuthUser, Session};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::client::BackendClient;
use super::errors::ApiError;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<AuthUser>,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| Utc::now().timestamp().saturating_add(secs)));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Email/password auth client holding the current session
pub struct AuthClient {
    client: BackendClient,
    session: RwLock<Option<Session>>,
}

impl AuthClient {
    pub fn new(client: BackendClient) -> Self {
        Self { client, session: RwLock::new(None) }
    }

    /// Start from an already established session (e.g. a token from the
    /// environment).
    pub fn with_session(client: BackendClient, session: Session) -> Self {
        Self { client, session: RwLock::new(Some(session)) }
    }

    /// Exchange credentials for a session and keep it as the current one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] with the auth service's message on bad
    /// credentials, or a transport error.
    #[instrument(skip(self, password))]
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/v1/token", None)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));

        let token: TokenResponse = self.client.send(request).await?;
        let session = token.into_session();

        info!(user_id = session.user.as_ref().map(|u| u.id.as_str()), "signed in");
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Look up the user that owns `access_token`.
    #[instrument(skip_all)]
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, ApiError> {
        let request = self.client.request(Method::GET, "/auth/v1/user", Some(access_token));
        self.client.send(request).await
    }

    /// Forget the current session. Local only.
    pub async fn sign_out(&self) {
        if self.session.write().await.take().is_some() {
            info!("signed out");
        }
    }
}

#[async_trait]
impl SessionProvider for AuthClient {
    async fn session(&self) -> talentbook_domain::Result<Option<Session>> {
        Ok(self.session.read().await.clone())
    }

    async fn user(&self) -> talentbook_domain::Result<Option<AuthUser>> {
        let Some(session) = self.session.read().await.clone() else {
            return Ok(None);
        };
        if let Some(user) = session.user {
            return Ok(Some(user));
        }
        if !session.is_valid(Utc::now()) {
            debug!("session expired, no user");
            return Ok(None);
        }
        Ok(Some(self.get_user(&session.access_token).await?))
    }
}

/// Session provider over an explicitly supplied session
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn session(&self) -> talentbook_domain::Result<Option<Session>> {
        Ok(self.session.clone())
    }

    async fn user(&self) -> talentbook_domain::Result<Option<AuthUser>> {
        Ok(self.session.as_ref().and_then(|s| s.user.clone()))
    }
}
