//! Sushi Shop Storefront library.
//!
//! Catalog browsing and a session-local shopping cart, exposed as a library
//! so the CLI and tests can drive it.
//!
//! # Modules
//!
//! - [`cart`] - Cart state, commands, observable store and selectors
//! - [`catalog`] - Product catalog and the built-in sample menu
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Unified error type for the boundaries around the cart
//! - [`state`] - Shared application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;

pub use error::{AppError, Result};
pub use state::AppState;
