use async_trait::async_trait;
use talentbook_core::SessionProvider;
use talentbook_domain::{AuthUser, Result as DomainResult, Session};

/// Session provider returning a fixed session.
#[derive(Clone, Default)]
pub struct FixedSession(pub Option<Session>);

impl FixedSession {
    pub fn signed_in(token: &str) -> Self {
        let mut session = Session::new(token);
        session.user = Some(AuthUser { id: "user-1".into(), email: None });
        Self(Some(session))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

#[async_trait]
impl SessionProvider for FixedSession {
    async fn session(&self) -> DomainResult<Option<Session>> {
        Ok(self.0.clone())
    }

    async fn user(&self) -> DomainResult<Option<AuthUser>> {
        Ok(self.0.as_ref().and_then(|s| s.user.clone()))
    }
}
