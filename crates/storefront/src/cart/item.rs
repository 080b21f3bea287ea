//! Cart line items.

use serde::{Deserialize, Serialize};
use sushi_shop_core::{ImageRef, Price, ProductId, Quantity};

/// Payload of an add: a line item without a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: ImageRef,
}

impl NewLineItem {
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Price,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image: image.into(),
        }
    }
}

/// One catalog item held in the cart, with its price snapshot and quantity.
///
/// Only the quantity changes after insertion; name, price and image keep the
/// values from the first add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: ProductId,
    name: String,
    unit_price: Price,
    image: ImageRef,
    quantity: Quantity,
}

impl LineItem {
    pub(crate) fn from_new(item: NewLineItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            image: item.image,
            quantity: Quantity::ONE,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub const fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
