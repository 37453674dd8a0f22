//! GoMarket cart state container.
//!
//! Holds the ordered list of cart line items for the current session,
//! mirrors every mutation to an asynchronous key-value store, and exposes
//! the state to UI code through a cheaply cloneable handle.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - the state container itself: hydrate once at
//!   startup, then `add_to_cart` / `increment` / `decrement`
//! - [`storage`] - the key-value contract the store persists through,
//!   plus in-memory and file-backed implementations
//! - [`provider`] - a task-scoped way to reach the store from code that
//!   cannot thread a handle parameter
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use gomarket_cart::{CartStore, MemoryStorage};
//! use gomarket_core::{NewCartItem, Price, ProductId};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), gomarket_cart::CartError> {
//! let cart = CartStore::hydrate(Arc::new(MemoryStorage::new())).await?;
//!
//! cart.add_to_cart(NewCartItem {
//!     id: ProductId::new("sku-1"),
//!     title: "Espresso Beans".to_owned(),
//!     image_url: "https://img.example.com/beans.png".to_owned(),
//!     price: Price::new(Decimal::new(1250, 2)),
//! })
//! .await?;
//!
//! assert_eq!(cart.item_count().await, 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod provider;
pub mod storage;
pub mod store;

pub use error::CartError;
pub use provider::{try_use_cart, use_cart, with_cart};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CART_PRODUCTS_KEY, CartStore};
