use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use talentbook_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use talentbook_domain::TalentBookError;
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client that sends each request exactly once.
///
/// Callers that want a retry start a new, distinct operation.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, TalentBookError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    ///
    /// Non-success statuses are returned as responses; only transport
    /// failures become errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, TalentBookError> {
        let request = builder.build().map_err(|err| TalentBookError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: HeaderMap,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: None,
            default_headers: HeaderMap::new(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a header sent with every request (e.g. the backend `apikey`).
    ///
    /// # Errors
    ///
    /// Returns [`TalentBookError::Config`] if the name or value is not a valid header.
    pub fn default_header(mut self, name: &str, value: &str) -> Result<Self, TalentBookError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TalentBookError::Config(format!("invalid header name {name:?}: {e}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| TalentBookError::Config(format!("invalid value for header {name}: {e}")))?;
        value.set_sensitive(true);
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpClient, TalentBookError> {
        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| TalentBookError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
