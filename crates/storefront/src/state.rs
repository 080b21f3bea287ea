//! Application state shared across the storefront.

use std::sync::Arc;

use sushi_shop_core::{Price, ProductId, Quantity};

use crate::cart::{CartStore, selectors};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;

/// Application state shared across all sessions.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the product catalog. Carts are per-session and are
/// not stored here; callers open one and pass it around explicitly.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Start a new, empty cart session.
    #[must_use]
    pub fn open_cart(&self) -> CartStore {
        let cart = CartStore::new();
        tracing::info!(session = %cart.session_id(), "cart opened");
        cart
    }

    /// Add one unit of a catalog product to `cart`.
    ///
    /// Returns the line's resulting quantity.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the product id is unknown; the cart is
    /// left untouched.
    pub fn add_to_cart(&self, cart: &CartStore, product_id: &ProductId) -> Result<Quantity> {
        let product = self.catalog().require(product_id)?;
        let quantity = cart.add_item(product.to_line_item());
        tracing::info!(
            session = %cart.session_id(),
            product = %product_id,
            quantity = quantity.get(),
            "added to cart"
        );
        Ok(quantity)
    }

    /// Cart subtotal in the configured display currency.
    #[must_use]
    pub fn subtotal(&self, cart: &CartStore) -> Price {
        let currency = self.config().currency;
        cart.select(|state| selectors::subtotal_in(state, currency))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sushi_shop_core::CurrencyCode;
    use url::Url;

    use super::*;
    use crate::catalog::CatalogError;
    use crate::config::Environment;
    use crate::error::AppError;

    fn state() -> AppState {
        let config = StorefrontConfig {
            environment: Environment::Development,
            app_url: Url::parse("http://localhost:3000").unwrap(),
            currency: CurrencyCode::USD,
            sentry_dsn: None,
        };
        AppState::new(config, Catalog::sample())
    }

    #[test]
    fn test_add_to_cart_snapshots_catalog_product() {
        let state = state();
        let cart = state.open_cart();

        let qty = state.add_to_cart(&cart, &ProductId::new("3")).unwrap();
        assert_eq!(qty, Quantity::ONE);
        let qty = state.add_to_cart(&cart, &ProductId::new("3")).unwrap();
        assert_eq!(qty.get(), 2);

        let snapshot = cart.snapshot();
        let line = snapshot.get(&ProductId::new("3")).unwrap();
        assert_eq!(line.name(), "California Roll");
        assert_eq!(state.subtotal(&cart).to_string(), "$19.98");
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_untouched() {
        let state = state();
        let cart = state.open_cart();

        let err = state.add_to_cart(&cart, &ProductId::new("nope")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::UnknownProduct(_))
        ));
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_each_cart_is_its_own_session() {
        let state = state();
        let a = state.open_cart();
        let b = state.open_cart();

        state.add_to_cart(&a, &ProductId::new("1")).unwrap();
        assert_ne!(a.session_id(), b.session_id());
        assert!(b.snapshot().is_empty());
    }
}
