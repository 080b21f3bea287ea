//! Sushi Shop Core - Shared types library.
//!
//! This crate provides common types used across all Sushi Shop components:
//! - `storefront` - Catalog, cart store and configuration
//! - `cli` - Command-line tools for browsing the menu and driving a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no global
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, image references, prices
//!   and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
