//! Observable cart store.
//!
//! A [`CartStore`] owns one session's [`CartState`] and is handed explicitly
//! to whatever needs it. Commands are applied synchronously in call order on
//! the caller's thread; observers hold a [`CartSubscription`] and are woken
//! only when a command actually changed the state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sushi_shop_core::{ProductId, Quantity};
use tokio::sync::watch;
use uuid::Uuid;

use super::command::CartCommand;
use super::item::NewLineItem;
use super::state::CartState;

/// Identifier of one cart session, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSessionId(Uuid);

impl CartSessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CartSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CartSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared cart store for a single session.
///
/// This struct is cheaply cloneable via `Arc`; every clone dispatches into
/// the same state.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    session_id: CartSessionId,
    started_at: DateTime<Utc>,
    state: watch::Sender<CartState>,
}

impl CartStore {
    /// Start a new session with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        let (state, _initial_rx) = watch::channel(CartState::new());
        let session_id = CartSessionId::new();
        tracing::debug!(session = %session_id, "cart session started");

        Self {
            inner: Arc::new(CartStoreInner {
                session_id,
                started_at: Utc::now(),
                state,
            }),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> CartSessionId {
        self.inner.session_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }

    /// Apply a command and notify subscribers if the state changed.
    ///
    /// Returns whether the state changed. Never fails.
    pub fn dispatch(&self, command: CartCommand) -> bool {
        self.dispatch_then(command, |_| ()).0
    }

    /// Apply a command, then read `f` from the resulting state before any
    /// other handle can write.
    fn dispatch_then<T: Default>(
        &self,
        command: CartCommand,
        f: impl FnOnce(&CartState) -> T,
    ) -> (bool, T) {
        let name = command.name();
        let mut read = None;
        let changed = self.inner.state.send_if_modified(|state| {
            let changed = state.apply(command);
            read = Some(f(state));
            changed
        });

        if changed {
            tracing::debug!(session = %self.inner.session_id, command = name, "cart updated");
        } else {
            tracing::trace!(session = %self.inner.session_id, command = name, "cart command was a no-op");
        }
        (changed, read.unwrap_or_default())
    }

    /// Add one unit of `item`, returning the line's quantity right after
    /// this add.
    pub fn add_item(&self, item: NewLineItem) -> Quantity {
        let id = item.id.clone();
        let (_, quantity) = self.dispatch_then(CartCommand::AddItem { item }, |state| {
            state.get(&id).map_or(Quantity::ONE, super::LineItem::quantity)
        });
        quantity
    }

    pub fn remove_item(&self, id: &ProductId) -> bool {
        self.dispatch(CartCommand::RemoveItem { id: id.clone() })
    }

    /// Set a line's quantity (clamped to at least one). Absent ids are ignored.
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) -> bool {
        self.dispatch(CartCommand::SetQuantity {
            id: id.clone(),
            quantity,
        })
    }

    pub fn clear(&self) -> bool {
        self.dispatch(CartCommand::ClearCart)
    }

    /// Flip panel visibility, returning the new value.
    pub fn toggle_open(&self) -> bool {
        self.dispatch_then(CartCommand::ToggleOpen, CartState::is_open).1
    }

    pub fn set_open(&self, value: bool) -> bool {
        self.dispatch(CartCommand::SetOpen { value })
    }

    pub fn set_loading(&self, value: bool) -> bool {
        self.dispatch(CartCommand::SetLoading { value })
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.inner.state.borrow().clone()
    }

    /// Compute a derived value from the current state under a single borrow.
    ///
    /// `f` must not dispatch into this store.
    pub fn select<T>(&self, f: impl FnOnce(&CartState) -> T) -> T {
        f(&self.inner.state.borrow())
    }

    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> Option<Quantity> {
        self.select(|state| state.get(id).map(super::LineItem::quantity))
    }

    /// Observe future changes. The current state counts as already seen.
    #[must_use]
    pub fn subscribe(&self) -> CartSubscription {
        CartSubscription {
            rx: self.inner.state.subscribe(),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.state.receiver_count()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("session_id", &self.inner.session_id)
            .field("started_at", &self.inner.started_at)
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}

/// Read handle that is notified when the cart changes.
#[derive(Debug, Clone)]
pub struct CartSubscription {
    rx: watch::Receiver<CartState>,
}

impl CartSubscription {
    /// Wait for the next change.
    ///
    /// Returns `false` once every handle of the store has been dropped and
    /// no unseen change remains.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Whether a change arrived that has not been observed yet.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Clone of the latest state, marking it as seen.
    pub fn current(&mut self) -> CartState {
        self.rx.borrow_and_update().clone()
    }

    /// Compute a derived value from the latest state, marking it as seen.
    pub fn select<T>(&mut self, f: impl FnOnce(&CartState) -> T) -> T {
        f(&self.rx.borrow_and_update())
    }
}
