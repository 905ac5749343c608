//! Configuration structures
//!
//! Loaded by `talentbook-infra::config` from the environment or a JSON/TOML
//! file.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOCALE};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Hosted backend endpoint and its public (anon) API key
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs(), user_agent: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Locale tag for user-facing notices (`en`, `es`, ...)
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { locale: default_locale() }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}
