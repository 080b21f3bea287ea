//! Integration tests for Sushi Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sushi-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart command sequences
//! - `cart_properties` - Property tests over arbitrary command sequences
//! - `cart_subscription` - Change notification across tasks
//!
//! This library only holds fixtures shared by the test binaries.

use sushi_shop_core::{CurrencyCode, Price};
use sushi_shop_storefront::AppState;
use sushi_shop_storefront::cart::NewLineItem;
use sushi_shop_storefront::catalog::Catalog;
use sushi_shop_storefront::config::{ConfigError, StorefrontConfig};

/// A line item priced in whole cents of USD.
#[must_use]
pub fn line(id: &str, name: &str, cents: u32) -> NewLineItem {
    NewLineItem::new(id, name, Price::from_cents(cents, CurrencyCode::USD), format!("/img/{id}.jpg"))
}

/// Application state over the sample menu with a development config.
///
/// # Errors
///
/// Returns `ConfigError` only if the fixed test configuration is rejected.
pub fn test_state() -> Result<AppState, ConfigError> {
    let config = StorefrontConfig::from_lookup(|key| match key {
        "APP_ENV" => Some("development".to_string()),
        "APP_URL" => Some("http://localhost:3000".to_string()),
        _ => None,
    })?;
    Ok(AppState::new(config, Catalog::sample()))
}
