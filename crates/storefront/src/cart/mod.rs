//! Session-local shopping cart.
//!
//! - [`CartState`] holds the line items and panel flags, and applies
//!   [`CartCommand`]s as a total reducer.
//! - [`CartStore`] wraps one session's state behind an observable handle.
//! - [`selectors`] derive read-only views such as item count and subtotal.
//!
//! Nothing here performs I/O or returns errors; a durable or server-synced
//! cart would sit on top of [`CartStore`], driving the loading flag.

mod command;
mod item;
pub mod selectors;
mod state;
mod store;

pub use command::CartCommand;
pub use item::{LineItem, NewLineItem};
pub use state::{CartState, MismatchedLineKey};
pub use store::{CartSessionId, CartStore, CartSubscription};
