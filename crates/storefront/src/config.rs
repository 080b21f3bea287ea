//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `APP_ENV` - Deployment environment (`development`, `staging`, `production`)
//! - `APP_URL` - Public base URL of the storefront, used to resolve image paths
//!
//! ## Optional
//! - `STOREFRONT_CURRENCY` - ISO 4217 display currency (default: USD)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::fmt;
use std::str::FromStr;

use sushi_shop_core::{CurrencyCode, ImageRef};
use thiserror::Error;
use url::Url;

/// Variables that must be present, in reporting order.
const REQUIRED_ENV_VARS: &[&str] = &["APP_ENV", "APP_URL"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "expected development, staging or production (got '{other}')"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Public base URL for the storefront
    pub app_url: Url,
    /// Currency used when displaying cart totals
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values count as missing. Every missing required variable is
    /// reported in a single error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<String> = REQUIRED_ENV_VARS
            .iter()
            .filter(|key| get(key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvVars(missing));
        }

        let environment = parse_var("APP_ENV", &get("APP_ENV").unwrap_or_default())?;
        let app_url = Url::parse(&get("APP_URL").unwrap_or_default())
            .map_err(|e| ConfigError::InvalidEnvVar("APP_URL".to_string(), e.to_string()))?;
        let currency = match get("STOREFRONT_CURRENCY") {
            Some(raw) => parse_var("STOREFRONT_CURRENCY", &raw)?,
            None => CurrencyCode::default(),
        };
        let sentry_dsn = get("SENTRY_DSN");

        Ok(Self {
            environment,
            app_url,
            currency,
            sentry_dsn,
        })
    }

    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }

    /// Resolve an image reference against the storefront base URL.
    ///
    /// Absolute references are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the reference cannot form a valid URL.
    pub fn asset_url(&self, image: &ImageRef) -> Result<Url, url::ParseError> {
        self.app_url.join(image.as_str())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, mapping the parse failure to `InvalidEnvVar`.
fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
