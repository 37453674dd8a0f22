//! Core types for GoMarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;
pub mod price;

pub use id::ProductId;
pub use item::{CartItem, NewCartItem};
pub use price::Price;
