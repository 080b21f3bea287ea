//! Unified storefront error type.
//!
//! The cart itself never fails; these errors come from the boundaries around
//! it: loading configuration, resolving products, parsing user input.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// User input could not be turned into a cart command.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl AppError {
    /// Whether the error is caused by user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Catalog(_) | Self::InvalidCommand(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
