//! GoMarket Core - Shared types library.
//!
//! This crate provides the domain types used across all GoMarket
//! components:
//! - `cart` - The cart state container and its storage backends
//! - `cli` - Command-line tools for inspecting and mutating a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! async runtime. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, and cart line records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
