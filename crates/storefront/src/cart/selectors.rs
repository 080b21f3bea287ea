//! Read-only derived views over [`CartState`].
//!
//! These take the state by reference so they can be handed straight to
//! [`CartStore::select`](super::CartStore::select) or
//! [`CartSubscription::select`](super::CartSubscription::select).

use rust_decimal::Decimal;
use sushi_shop_core::{CurrencyCode, Price, ProductId};

use super::item::LineItem;
use super::state::CartState;

/// Total number of units across all lines.
#[must_use]
pub fn item_count(state: &CartState) -> u64 {
    state
        .items()
        .map(|line| u64::from(line.quantity().get()))
        .sum()
}

/// Number of distinct lines.
#[must_use]
pub fn distinct_items(state: &CartState) -> usize {
    state.len()
}

/// Sum of unit price times quantity over every line.
#[must_use]
pub fn subtotal(state: &CartState) -> Decimal {
    subtotal_in(state, CurrencyCode::default()).amount()
}

/// Subtotal as a [`Price`] labelled with `currency`.
///
/// Amounts are summed as-is; the cart assumes one currency per session.
#[must_use]
pub fn subtotal_in(state: &CartState, currency: CurrencyCode) -> Price {
    state
        .items()
        .fold(Price::zero(currency), |acc, line| acc.plus(line.line_total()))
}

#[must_use]
pub fn line_item<'a>(state: &'a CartState, id: &ProductId) -> Option<&'a LineItem> {
    state.get(id)
}

#[must_use]
pub fn contains(state: &CartState, id: &ProductId) -> bool {
    state.get(id).is_some()
}

#[must_use]
pub fn is_empty(state: &CartState) -> bool {
    state.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartCommand, NewLineItem};

    fn filled() -> CartState {
        let mut state = CartState::new();
        state.apply(
            NewLineItem::new("B", "Nigiri", Price::from_cents(350, CurrencyCode::USD), "img2")
                .into(),
        );
        state.apply(
            NewLineItem::new("C", "Sashimi", Price::from_cents(500, CurrencyCode::USD), "img3")
                .into(),
        );
        state.apply(CartCommand::SetQuantity {
            id: ProductId::new("B"),
            quantity: 3,
        });
        state
    }

    #[test]
    fn test_empty_cart() {
        let state = CartState::new();
        assert_eq!(item_count(&state), 0);
        assert_eq!(subtotal(&state), Decimal::ZERO);
        assert!(is_empty(&state));
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let state = filled();
        assert_eq!(item_count(&state), 4);
        assert_eq!(distinct_items(&state), 2);
    }

    #[test]
    fn test_subtotal() {
        // 3 x 3.50 + 1 x 5.00
        assert_eq!(subtotal(&filled()), Decimal::new(1550, 2));
    }

    #[test]
    fn test_subtotal_in_currency() {
        let total = subtotal_in(&filled(), CurrencyCode::EUR);
        assert_eq!(total.to_string(), "€15.50");
    }

    #[test]
    fn test_lookup() {
        let state = filled();
        assert!(contains(&state, &ProductId::new("C")));
        assert!(!contains(&state, &ProductId::new("Z")));
        assert_eq!(
            line_item(&state, &ProductId::new("B")).map(LineItem::name),
            Some("Nigiri")
        );
    }
}
