//! Magi Core - Shared types and cart state library.
//!
//! This crate provides the types used across all Magi components:
//! - `storefront` - Public-facing e-commerce API
//! - `admin` - Internal administration API
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no database access, no HTTP clients. The cart and favorites containers
//! here are deliberately side-effect free; persistence is layered on top by
//! the storefront.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`cart`] - The shopping cart state container
//! - [`favorites`] - The favorited-product set
//! - [`snapshot`] - Serialization of cart/favorites to durable snapshots

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod favorites;
pub mod snapshot;
pub mod types;

pub use cart::{Cart, CartLine};
pub use favorites::FavoriteSet;
pub use types::*;
