//! Integration tests for GoMarket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gomarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Hydrate/mutate/re-hydrate flows against the
//!   file-backed storage
//! - `cart_scope` - Task-scoped provider access and change subscriptions
//!
//! The helpers below build sample catalog data shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use gomarket_core::{NewCartItem, Price, ProductId};
use rust_decimal::Decimal;

/// Build a candidate cart item with a deterministic title and image URL.
#[must_use]
pub fn sample_item(id: &str, price_cents: i64) -> NewCartItem {
    NewCartItem {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://img.example.com/{id}.png"),
        price: Price::new(Decimal::new(price_cents, 2)),
    }
}
