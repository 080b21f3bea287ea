//! Core types for Sushi Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod image;
pub mod price;
pub mod quantity;

pub use id::*;
pub use image::ImageRef;
pub use price::{CurrencyCode, Price, PriceError, UnknownCurrency};
pub use quantity::Quantity;
