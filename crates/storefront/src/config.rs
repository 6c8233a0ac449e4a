//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOP_API_URL` - Base URL of the product authority (default: `http://localhost:8082`)
//! - `SHOP_REQUEST_TIMEOUT_SECS` - HTTP timeout in seconds (default: none)
//! - `SHOP_LOAD_ORDERING` - `last-resolved` or `latest-issued` (default: `last-resolved`)
//! - `SHOP_VALIDATE_DRAFTS` - Check drafts before submitting (default: `false`)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::store::LoadOrdering;

const DEFAULT_API_URL: &str = "http://localhost:8082";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Product authority connection settings
    pub api: ApiConfig,
    /// How overlapping catalog loads are reconciled
    pub load_ordering: LoadOrdering,
    /// Whether drafts are checked before they are sent
    pub validate_drafts: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Product authority connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL; `/product` is resolved against it
    pub base_url: Url,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ApiConfig {
    /// Settings for an authority at `base_url` with no timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            request_timeout: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("SHOP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_API_URL".to_string(), e.to_string()))?;

        let request_timeout = lookup("SHOP_REQUEST_TIMEOUT_SECS")
            .map(|raw| parse_timeout(&raw, "SHOP_REQUEST_TIMEOUT_SECS"))
            .transpose()?;

        let load_ordering = lookup("SHOP_LOAD_ORDERING")
            .map(|raw| {
                raw.parse::<LoadOrdering>().map_err(|e| {
                    ConfigError::InvalidEnvVar("SHOP_LOAD_ORDERING".to_string(), e)
                })
            })
            .transpose()?
            .unwrap_or_default();

        let validate_drafts = lookup("SHOP_VALIDATE_DRAFTS")
            .map(|raw| parse_bool(&raw, "SHOP_VALIDATE_DRAFTS"))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            api: ApiConfig {
                base_url,
                request_timeout,
            },
            load_ordering,
            validate_drafts,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty()),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_bool(raw: &str, var_name: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

/// Parse a whole number of seconds. Zero is rejected.
fn parse_timeout(raw: &str, var_name: &str) -> Result<Duration, ConfigError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}
