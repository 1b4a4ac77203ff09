//! Shared type definitions.

pub mod email;
pub mod id;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{
    AdminUserId, CategoryId, CustomerId, OrderId, OrderItemId, ProductId, ReviewId, UserId,
};
pub use status::{AdminRole, OrderStatus, PaymentStatus, ProductStatus, ReviewStatus};
