//! Storefront services.

pub mod auth;
pub mod cart;

pub use auth::{AuthError, AuthService};
pub use cart::CartSession;
