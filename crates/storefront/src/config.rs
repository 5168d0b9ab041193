//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults:
//! - `CLEMENTINE_API_URL` - Base URL of the catalog API (default: <http://localhost:3001>)
//! - `CLEMENTINE_ADMIN_EMAIL` - Identity granted Admin access on login
//!   (default: admin@example.com)
//! - `CLEMENTINE_HTTP_TIMEOUT_SECS` - Per-request timeout for remote calls
//!   (default: 10)
//! - `CLEMENTINE_HOME` - Directory for durable session/cart state
//!   (default: `~/.clementine`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use clementine_core::Email;

const DEFAULT_API_URL: &str = "http://localhost:3001";
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_HTTP_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the catalog API
    pub api_base_url: Url,
    /// Identity granted Admin access on login
    pub admin_email: Email,
    /// Directory for durable session/cart state
    pub state_dir: PathBuf,
    /// Per-request timeout for remote calls
    pub http_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("CLEMENTINE_API_URL", DEFAULT_API_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLEMENTINE_API_URL".to_owned(), e.to_string())
            })?;

        let admin_email = get_env_or_default("CLEMENTINE_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL)
            .parse::<Email>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLEMENTINE_ADMIN_EMAIL".to_owned(), e.to_string())
            })?;

        let timeout_secs =
            get_env_or_default("CLEMENTINE_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
                .parse::<u64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "CLEMENTINE_HTTP_TIMEOUT_SECS".to_owned(),
                        e.to_string(),
                    )
                })?;

        Ok(Self {
            api_base_url,
            admin_email,
            state_dir: state_home(),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get the durable state directory.
///
/// Uses `CLEMENTINE_HOME` if set, otherwise `~/.clementine`.
#[must_use]
pub fn state_home() -> PathBuf {
    if let Ok(home) = std::env::var("CLEMENTINE_HOME") {
        PathBuf::from(home)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".clementine")
    } else {
        PathBuf::from(".clementine")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_parses() {
        assert!(DEFAULT_API_URL.parse::<Url>().is_ok());
    }

    #[test]
    fn test_default_admin_email_parses() {
        assert!(DEFAULT_ADMIN_EMAIL.parse::<Email>().is_ok());
    }

    #[test]
    fn test_default_timeout_parses() {
        assert_eq!(DEFAULT_HTTP_TIMEOUT_SECS.parse::<u64>().unwrap(), 10);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEnvVar("CLEMENTINE_API_URL".to_owned(), "bad url".to_owned());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable CLEMENTINE_API_URL: bad url"
        );
    }
}
