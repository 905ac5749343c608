//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TALENTBOOK_BACKEND_URL`: Backend project URL (required)
//! - `TALENTBOOK_ANON_KEY`: Public anon key (required)
//! - `TALENTBOOK_HTTP_TIMEOUT`: Request timeout in seconds
//! - `TALENTBOOK_USER_AGENT`: User agent sent with every request
//! - `TALENTBOOK_LOCALE`: Locale tag for conflict notices (`en`, `es`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./talentbook.{json,toml}` then `./config.{json,toml}`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use talentbook_domain::{BackendConfig, Config, HttpConfig, Result, TalentBookError, UiConfig};

const FILE_NAMES: [&str; 4] = ["talentbook.json", "talentbook.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `TalentBookError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `TalentBookError::Config` if the backend URL or anon key is
/// missing, or the timeout is not a positive integer.
pub fn load_from_env() -> Result<Config> {
    let url = env_var("TALENTBOOK_BACKEND_URL")?;
    let anon_key = env_var("TALENTBOOK_ANON_KEY")?;

    let mut http = HttpConfig::default();
    if let Some(timeout) = env_opt("TALENTBOOK_HTTP_TIMEOUT") {
        http.timeout_secs = parse_timeout(&timeout)?;
    }
    http.user_agent = env_opt("TALENTBOOK_USER_AGENT");

    let mut ui = UiConfig::default();
    if let Some(locale) = env_opt("TALENTBOOK_LOCALE") {
        ui.locale = locale;
    }

    let config = Config { backend: BackendConfig { url, anon_key }, http, ui };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `TalentBookError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TalentBookError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TalentBookError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TalentBookError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TalentBookError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TalentBookError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TalentBookError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.backend.url.trim().is_empty() {
        return Err(TalentBookError::Config("backend.url must not be empty".to_string()));
    }
    if config.backend.anon_key.trim().is_empty() {
        return Err(TalentBookError::Config("backend.anon_key must not be empty".to_string()));
    }
    url::Url::parse(config.backend.base_url())
        .map_err(|e| TalentBookError::Config(format!("Invalid backend URL: {e}")))?;
    if config.http.timeout_secs == 0 {
        return Err(TalentBookError::Config("http.timeout_secs must be positive".to_string()));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        Ok(_) => Err(TalentBookError::Config("HTTP timeout must be positive".to_string())),
        Err(e) => Err(TalentBookError::Config(format!("Invalid HTTP timeout: {e}"))),
    }
}

/// Get required environment variable
///
/// # Errors
/// Returns `TalentBookError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        TalentBookError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
