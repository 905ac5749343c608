use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use talentbook_core::{Locale, SessionProvider};
use talentbook_domain::{Config, Session};
use talentbook_infra::{config, AuthClient, BackendClient, BackendClientConfig};
use tracing::{info, warn};

use crate::Credentials;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => config::load_from_file(Some(path.to_path_buf())),
        None => config::load(),
    };
    config.context("failed to load configuration")
}

/// Config for commands that can run without a backend.
///
/// An explicit path must load. Otherwise a missing or broken config is
/// logged and the command runs on defaults.
pub fn load_optional_config(path: Option<&Path>) -> Result<Option<Config>> {
    if path.is_some() {
        return load_config(path).map(Some);
    }
    match config::load() {
        Ok(config) => Ok(Some(config)),
        Err(e) => {
            warn!(error = %e, "no usable configuration; using defaults");
            Ok(None)
        }
    }
}

/// Everything a backend-facing command needs
pub struct AppContext {
    pub config: Config,
    pub client: BackendClient,
    pub auth: Arc<AuthClient>,
}

impl AppContext {
    /// Load config and establish a session from the given credentials.
    ///
    /// With neither a token nor email/password the context stays signed out;
    /// commands that need a session then fail with an authentication error.
    pub async fn connect(config_path: Option<&Path>, credentials: &Credentials) -> Result<Self> {
        let config = load_config(config_path)?;
        let client = BackendClient::new(BackendClientConfig::from(&config))
            .context("failed to create backend client")?;

        let auth = match (&credentials.access_token, &credentials.email, &credentials.password) {
            (Some(token), _, _) => AuthClient::with_session(client.clone(), Session::new(token.clone())),
            (None, Some(email), Some(password)) => {
                let auth = AuthClient::new(client.clone());
                auth.sign_in_with_password(email, password)
                    .await
                    .with_context(|| format!("sign-in failed for {email}"))?;
                auth
            }
            (None, Some(_), None) => anyhow::bail!("--email needs --password (or TALENTBOOK_PASSWORD)"),
            _ => AuthClient::new(client.clone()),
        };

        match auth.user().await {
            Ok(Some(user)) => info!(user_id = %user.id, "session ready"),
            Ok(None) => {}
            Err(e) if credentials.access_token.is_some() => {
                return Err(e).context("access token was rejected");
            }
            Err(e) => warn!(error = %e, "could not read the signed-in user"),
        }

        Ok(Self { config, client, auth: Arc::new(auth) })
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.config.ui.locale)
    }

    pub fn session(&self) -> Arc<dyn SessionProvider> {
        self.auth.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{Builder, NamedTempFile};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[backend]\nurl = \"{}\"\nanon_key = \"anon\"\n", server.uri()).unwrap();
        file
    }

    #[test]
    fn explicit_broken_config_is_an_error() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[backend\nurl = ").unwrap();

        assert!(load_optional_config(Some(file.path())).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[backend]\nurl = \"https://project.backend.test\"\nanon_key = \"anon\"\n\n[ui]\nlocale = \"es\"\n"
        )
        .unwrap();

        let config = load_optional_config(Some(file.path())).unwrap().unwrap();
        assert_eq!(config.ui.locale, "es");
    }

    #[tokio::test]
    async fn rejected_access_token_fails_at_connect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("Authorization", "Bearer stale-jwt"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({ "msg": "invalid JWT" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let file = config_for(&server);
        let credentials =
            Credentials { access_token: Some("stale-jwt".into()), email: None, password: None };

        let err = AppContext::connect(Some(file.path()), &credentials).await.err().unwrap();
        assert!(format!("{err:#}").contains("access token was rejected"));
    }

    #[tokio::test]
    async fn signed_out_context_connects_without_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(500)).expect(0).mount(&server).await;
        let file = config_for(&server);
        let credentials = Credentials { access_token: None, email: None, password: None };

        let ctx = AppContext::connect(Some(file.path()), &credentials).await.unwrap();
        assert_eq!(ctx.session().session().await.unwrap(), None);
    }
}
