//! Cart state and the command reducer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sushi_shop_core::{ProductId, Quantity};
use thiserror::Error;

use super::command::CartCommand;
use super::item::{LineItem, NewLineItem};

/// Session-local cart contents plus panel flags.
///
/// Items keep insertion order for display; lookups are by product id.
///
/// # Invariants
///
/// - Every line quantity is at least one.
/// - No two lines share an id.
/// - Name, price and image of a line never change after insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCartState")]
pub struct CartState {
    items: IndexMap<ProductId, LineItem>,
    is_open: bool,
    /// Reserved for a future server sync. No command sets it implicitly.
    is_loading: bool,
}

/// Unvalidated wire form of [`CartState`].
#[derive(Deserialize)]
struct RawCartState {
    items: IndexMap<ProductId, LineItem>,
    #[serde(default)]
    is_open: bool,
    #[serde(default)]
    is_loading: bool,
}

/// A serialized cart whose line is filed under another product's id.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cart line {line} is stored under key {key}")]
pub struct MismatchedLineKey {
    pub key: ProductId,
    pub line: ProductId,
}

impl TryFrom<RawCartState> for CartState {
    type Error = MismatchedLineKey;

    fn try_from(raw: RawCartState) -> Result<Self, Self::Error> {
        if let Some((key, line)) = raw.items.iter().find(|(key, line)| *key != line.id()) {
            return Err(MismatchedLineKey {
                key: key.clone(),
                line: line.id().clone(),
            });
        }
        Ok(Self {
            items: raw.items,
            is_open: raw.is_open,
            is_loading: raw.is_loading,
        })
    }
}

impl CartState {
    /// An empty, closed, idle cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &LineItem> {
        self.items.values()
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Apply a command, returning whether anything changed.
    ///
    /// Never fails: unknown ids are ignored and quantities are clamped.
    pub fn apply(&mut self, command: CartCommand) -> bool {
        match command {
            CartCommand::AddItem { item } => self.add_item(item),
            CartCommand::RemoveItem { id } => self.items.shift_remove(&id).is_some(),
            CartCommand::SetQuantity { id, quantity } => {
                self.set_quantity(&id, Quantity::clamped(quantity))
            }
            CartCommand::ClearCart => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
            CartCommand::ToggleOpen => {
                self.is_open = !self.is_open;
                true
            }
            CartCommand::SetOpen { value } => replace_flag(&mut self.is_open, value),
            CartCommand::SetLoading { value } => replace_flag(&mut self.is_loading, value),
        }
    }

    /// Returns `false` only when the line is already at the quantity ceiling.
    fn add_item(&mut self, item: NewLineItem) -> bool {
        match self.items.get_mut(&item.id) {
            // First write wins: the existing snapshot is kept as-is.
            Some(existing) => {
                let before = existing.quantity();
                existing.set_quantity(before.increment());
                existing.quantity() != before
            }
            None => {
                self.items
                    .insert(item.id.clone(), LineItem::from_new(item));
                true
            }
        }
    }

    fn set_quantity(&mut self, id: &ProductId, quantity: Quantity) -> bool {
        match self.items.get_mut(id) {
            Some(line) if line.quantity() != quantity => {
                line.set_quantity(quantity);
                true
            }
            _ => false,
        }
    }
}

/// Set a flag, reporting whether it changed.
fn replace_flag(flag: &mut bool, value: bool) -> bool {
    let changed = *flag != value;
    *flag = value;
    changed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use sushi_shop_core::{CurrencyCode, Price};

    use super::*;

    fn item(id: &str, name: &str, cents: u32) -> NewLineItem {
        NewLineItem::new(
            id,
            name,
            Price::from_cents(cents, CurrencyCode::USD),
            format!("/images/{id}.jpg"),
        )
    }

    fn qty(state: &CartState, id: &str) -> Option<u32> {
        state.get(&ProductId::new(id)).map(|line| line.quantity().get())
    }

    #[test]
    fn test_new_is_empty() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert!(!state.is_open());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_add_inserts_with_quantity_one() {
        let mut state = CartState::new();
        assert!(state.apply(item("A", "Roll", 999).into()));
        assert_eq!(qty(&state, "A"), Some(1));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_add_existing_increments_and_keeps_first_snapshot() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());
        state.apply(item("A", "Renamed", 2500).into());

        let line = state.get(&ProductId::new("A")).unwrap();
        assert_eq!(line.quantity().get(), 2);
        assert_eq!(line.name(), "Roll");
        assert_eq!(line.unit_price().amount(), Decimal::new(999, 2));
        assert_eq!(line.image().as_str(), "/images/A.jpg");
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());

        assert!(state.apply(CartCommand::RemoveItem { id: ProductId::new("A") }));
        assert!(!state.apply(CartCommand::RemoveItem { id: ProductId::new("A") }));
        assert!(state.is_empty());
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut state = CartState::new();
        for id in ["A", "B", "C"] {
            state.apply(item(id, id, 100).into());
        }
        state.apply(CartCommand::RemoveItem { id: ProductId::new("B") });

        let ids: Vec<&str> = state.items().map(|line| line.id().as_str()).collect();
        assert_eq!(ids, ["A", "C"]);
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());

        state.apply(CartCommand::SetQuantity { id: ProductId::new("A"), quantity: 5 });
        assert_eq!(qty(&state, "A"), Some(5));

        state.apply(CartCommand::SetQuantity { id: ProductId::new("A"), quantity: -2 });
        assert_eq!(qty(&state, "A"), Some(1));
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut state = CartState::new();
        let changed = state.apply(CartCommand::SetQuantity {
            id: ProductId::new("ghost"),
            quantity: 3,
        });
        assert!(!changed);
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_quantity_same_value_reports_unchanged() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());
        assert!(!state.apply(CartCommand::SetQuantity { id: ProductId::new("A"), quantity: 1 }));
    }

    #[test]
    fn test_clear_keeps_flags() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());
        state.apply(CartCommand::SetOpen { value: true });
        state.apply(CartCommand::SetLoading { value: true });

        assert!(state.apply(CartCommand::ClearCart));
        assert!(state.is_empty());
        assert!(state.is_open());
        assert!(state.is_loading());
        assert!(!state.apply(CartCommand::ClearCart));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = CartState::new();
        state.apply(CartCommand::ToggleOpen);
        assert!(state.is_open());
        state.apply(CartCommand::ToggleOpen);
        assert!(!state.is_open());
    }

    #[test]
    fn test_set_open_idempotent() {
        let mut state = CartState::new();
        assert!(state.apply(CartCommand::SetOpen { value: true }));
        assert!(!state.apply(CartCommand::SetOpen { value: true }));
        assert!(state.is_open());
    }

    #[test]
    fn test_add_at_quantity_ceiling_reports_unchanged() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());
        state.apply(CartCommand::SetQuantity { id: ProductId::new("A"), quantity: i64::MAX });
        let before = state.clone();

        assert!(!state.apply(item("A", "Roll", 999).into()));
        assert_eq!(state, before);
        assert_eq!(qty(&state, "A"), Some(u32::MAX));
    }

    #[test]
    fn test_deserialize_round_trips_valid_state() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());
        state.apply(item("B", "Bowl", 1599).into());
        state.apply(CartCommand::SetOpen { value: true });

        let json = serde_json::to_string(&state).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_deserialize_rejects_line_under_foreign_key() {
        let json = r#"{
            "items": {
                "A": {
                    "id": "B",
                    "name": "Roll",
                    "unit_price": {"amount": "9.99", "currency_code": "USD"},
                    "image": "/images/B.jpg",
                    "quantity": 1
                }
            },
            "is_open": false,
            "is_loading": false
        }"#;

        let err = serde_json::from_str::<CartState>(json).unwrap_err();
        assert!(err.to_string().contains("Cart line B is stored under key A"));
    }

    #[test]
    fn test_add_does_not_touch_flags() {
        let mut state = CartState::new();
        state.apply(item("A", "Roll", 999).into());
        assert!(!state.is_open());
        assert!(!state.is_loading());
    }
}
