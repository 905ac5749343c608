//! Backend API client
//!
//! Shared plumbing for the auth, functions and REST adapters: URL building,
//! the `apikey` / bearer headers, timeouts, status classification and
//! extraction of the remote error message.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use talentbook_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use talentbook_domain::Config;
use tracing::{debug, warn};

use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for the backend client
#[derive(Clone)]
pub struct BackendClientConfig {
    /// Project base URL (e.g. "https://abc.supabase.co")
    pub base_url: String,
    /// Public anon key, sent as `apikey` on every request
    pub anon_key: String,
    /// Timeout for each request
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl BackendClientConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl From<&Config> for BackendClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.backend.base_url().to_string(),
            anon_key: config.backend.anon_key.clone(),
            timeout: Duration::from_secs(config.http.timeout_secs),
            user_agent: config.http.user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for BackendClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Low-level client for the hosted backend
#[derive(Clone)]
pub struct BackendClient {
    http: HttpClient,
    config: BackendClientConfig,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is empty or the HTTP
    /// client cannot be built.
    pub fn new(mut config: BackendClientConfig) -> Result<Self, ApiError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.base_url.is_empty() {
            return Err(ApiError::Config("backend URL is empty".to_string()));
        }

        let mut builder = HttpClient::builder()
            .timeout(config.timeout)
            .default_header("apikey", &config.anon_key)?;
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Absolute URL for a path under the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Start a request authorized with `bearer`, or with the anon key when
    /// there is no user token.
    pub fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let token = bearer.unwrap_or(&self.config.anon_key);
        self.http
            .request(method, self.url(path))
            .bearer_auth(token)
            .header("Content-Type", "application/json")
    }

    /// Send `request` once and decode a JSON body.
    ///
    /// 204/205 responses decode from `null`, so `()` and `Option<T>` work.
    ///
    /// # Errors
    ///
    /// Non-success statuses become status-classified [`ApiError`]s carrying
    /// the remote message; transport failures become [`ApiError::Network`]
    /// or [`ApiError::Timeout`].
    pub async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ApiError> {
        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, self.http.send(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(ApiError::from(err)),
            Err(_) => return Err(ApiError::Timeout(timeout)),
        };

        let status = response.status();
        let url = response.url().clone();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, %status, "backend returned error status");
            return Err(Self::map_status_error(status, &body));
        }

        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "No content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        debug!(%url, %status, bytes = body.len(), "backend response received");
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn map_status_error(status: StatusCode, body: &str) -> ApiError {
        let message = extract_error_message(body);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}

/// Pull the human-readable message out of an error body.
///
/// Understands `{"error_description": "..."}` (auth errors), `{"error": "..."}`,
/// `{"error": {"message": "..."}}`, `{"message": "..."}` and `{"msg": "..."}`;
/// anything else is returned as trimmed text. May be empty.
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
        return trimmed.to_string();
    };

    let candidates = [
        json.get("error_description").and_then(Value::as_str),
        json.get("error").and_then(Value::as_str),
        json.get("error").and_then(|e| e.get("message")).and_then(Value::as_str),
        json.get("message").and_then(Value::as_str),
        json.get("msg").and_then(Value::as_str),
    ];

    let found = candidates.into_iter().flatten().find(|m| !m.trim().is_empty());
    match found {
        Some(message) => message.trim().to_string(),
        None if json.is_object() => String::new(),
        None => trimmed.to_string(),
    }
}
