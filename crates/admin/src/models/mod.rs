//! Domain models for the admin back office.
//!
//! Raw rows are converted (and status strings parsed) at the repository
//! boundary, so everything above it works with typed values.

pub mod admin_user;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;
pub mod review;
pub mod session;

pub use admin_user::{AdminUser, CurrentAdmin};
pub use category::{Category, NewCategory};
pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderWithItems};
pub use product::{NewProduct, Product, ProductPatch};
pub use review::Review;
pub use session::session_keys;
