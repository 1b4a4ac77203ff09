//! Domain models for the storefront.
//!
//! These are the validated record types handed out by the data-access layer.
//! Raw rows are converted (and status strings parsed) at the repository
//! boundary, so everything above it works with typed values.

pub mod category;
pub mod product;
pub mod review;
pub mod session;
pub mod user;

pub use category::Category;
pub use product::Product;
pub use review::Review;
pub use session::session_keys;
pub use user::{CurrentUser, User};
