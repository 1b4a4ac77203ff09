//! Review model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use magi_core::{CustomerId, ProductId, ReviewId, ReviewStatus};

/// A product review.
///
/// Only approved reviews are returned by the storefront repository.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub customer_id: CustomerId,
    pub rating: i16,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}
