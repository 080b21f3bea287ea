//! Cart commands.
//!
//! Commands are plain data so they can be logged, replayed from a script or
//! sent across a channel before being applied by [`CartState::apply`].
//!
//! [`CartState::apply`]: super::CartState::apply

use serde::{Deserialize, Serialize};
use sushi_shop_core::ProductId;

use super::item::NewLineItem;

/// A named operation that deterministically transforms the cart state.
///
/// Every command is total: missing ids are no-ops and out-of-range
/// quantities are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CartCommand {
    /// Insert with quantity 1, or increment an existing line by one.
    AddItem {
        #[serde(flatten)]
        item: NewLineItem,
    },
    /// Drop the line if present.
    RemoveItem { id: ProductId },
    /// Set an existing line's quantity to `max(1, quantity)`.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Empty the items; visibility and loading flags are kept.
    ClearCart,
    /// Flip the panel visibility.
    ToggleOpen,
    /// Set the panel visibility explicitly.
    SetOpen { value: bool },
    /// Set the loading flag explicitly.
    SetLoading { value: bool },
}

impl CartCommand {
    /// Stable snake_case name, used as a tracing field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::SetQuantity { .. } => "set_quantity",
            Self::ClearCart => "clear_cart",
            Self::ToggleOpen => "toggle_open",
            Self::SetOpen { .. } => "set_open",
            Self::SetLoading { .. } => "set_loading",
        }
    }
}

impl From<NewLineItem> for CartCommand {
    fn from(item: NewLineItem) -> Self {
        Self::AddItem { item }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use sushi_shop_core::{CurrencyCode, Price};

    use super::*;

    #[test]
    fn test_parse_yaml_script() {
        let script = r#"
- command: add_item
  id: "A"
  name: Roll
  unit_price:
    amount: "9.99"
    currency_code: USD
  image: img
- command: set_quantity
  id: "A"
  quantity: 0
- command: toggle_open
- command: set_loading
  value: true
- command: clear_cart
"#;
        let commands: Vec<CartCommand> = serde_yaml::from_str(script).unwrap();

        assert_eq!(commands.len(), 5);
        let expected = NewLineItem::new(
            "A",
            "Roll",
            Price::new(Decimal::new(999, 2), CurrencyCode::USD).unwrap(),
            "img",
        );
        assert_eq!(commands[0], CartCommand::from(expected));
        assert_eq!(
            commands[1],
            CartCommand::SetQuantity {
                id: ProductId::new("A"),
                quantity: 0
            }
        );
        assert_eq!(commands[4], CartCommand::ClearCart);
    }

    #[test]
    fn test_json_tag() {
        let json = serde_json::to_value(CartCommand::SetOpen { value: true }).unwrap();
        assert_eq!(json["command"], "set_open");
        assert_eq!(json["value"], true);
    }

    #[test]
    fn test_names() {
        assert_eq!(CartCommand::ClearCart.name(), "clear_cart");
        assert_eq!(
            CartCommand::RemoveItem {
                id: ProductId::new("x")
            }
            .name(),
            "remove_item"
        );
    }
}
