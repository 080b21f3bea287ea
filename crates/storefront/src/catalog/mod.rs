//! Product catalog.
//!
//! The catalog is read-only reference data. Adding a product to the cart
//! snapshots its name, price and image through [`Product::to_line_item`], so
//! later catalog edits never reach lines already in a cart.

mod sample;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sushi_shop_core::{CategoryId, ImageRef, Price, ProductId};
use thiserror::Error;

use crate::cart::NewLineItem;

/// Catalog lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// A menu category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Dietary markers shown as badges on product cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub gluten_free: bool,
    pub spicy: bool,
}

/// Merchandising markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBadges {
    pub new: bool,
    pub featured: bool,
    pub popular: bool,
}

/// Per-serving nutrition facts, in kcal and grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: Option<u32>,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: ImageRef,
    pub category: Category,
    #[serde(default)]
    pub dietary: DietaryFlags,
    #[serde(default)]
    pub badges: ProductBadges,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub nutrition: Option<NutritionalInfo>,
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub review_count: u32,
}

impl Product {
    /// Snapshot the fields a cart line keeps.
    #[must_use]
    pub fn to_line_item(&self) -> NewLineItem {
        NewLineItem {
            id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            image: self.image.clone(),
        }
    }
}

/// An ordered, in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog. Later duplicates of an id are dropped.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                tracing::warn!(product = %product.id, "duplicate catalog id ignored");
                continue;
            }
            unique.push(product);
        }
        Self { products: unique }
    }

    /// The built-in sushi menu used for development and demos.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample::products())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Like [`find`](Self::find), but an unknown id is an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownProduct` if no product has this id.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.clone()))
    }

    pub fn by_category<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| &p.category.id == category)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for product in &self.products {
            if !seen.iter().any(|c| c.id == product.category.id) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.badges.featured)
    }

    pub fn popular(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.badges.popular)
    }
}
