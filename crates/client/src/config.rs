//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RECOMMEND_BASE_URL` - Backend origin (default: `http://127.0.0.1:8000`)
//! - `RECOMMEND_ACCESS_TOKEN` - Pre-issued session token, sent as the
//!   `access_token` cookie
//! - `RECOMMEND_USER_AGENT` - `User-Agent` header for outgoing requests
//! - `RECOMMEND_LOG_FORMAT` - `text` or `json` (default: `text`)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Backend origin; API paths are resolved against it.
    pub base_url: Url,
    /// Session token to present as the `access_token` cookie.
    pub access_token: Option<SecretString>,
    /// Custom `User-Agent` header.
    pub user_agent: Option<String>,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("user_agent", &self.user_agent)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with no token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            access_token: None,
            user_agent: None,
            log_format: LogFormat::default(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url =
            parse_base_url(&get("RECOMMEND_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()))?;
        let access_token = get("RECOMMEND_ACCESS_TOKEN").map(SecretString::from);
        let user_agent = get("RECOMMEND_USER_AGENT");
        let log_format = get("RECOMMEND_LOG_FORMAT")
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("RECOMMEND_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            base_url,
            access_token,
            user_agent,
            log_format,
        })
    }
}

/// Parse the backend origin, normalizing it to end with `/` so relative API
/// paths keep any path prefix.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar("RECOMMEND_BASE_URL".to_string(), e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            "RECOMMEND_BASE_URL".to_string(),
            format!("{raw} cannot be used as a base URL"),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
