//! Review repository for the storefront.
//!
//! The storefront only ever sees approved reviews; moderation happens in the
//! admin service.

use sqlx::PgPool;

use magi_core::{CustomerId, ProductId, ReviewId, ReviewStatus};

use super::RepositoryError;
use crate::models::Review;

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: ReviewId,
    product_id: ProductId,
    customer_id: CustomerId,
    rating: i16,
    comment: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = RepositoryError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let status: ReviewStatus = row
            .status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("review {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            product_id: row.product_id,
            customer_id: row.customer_id,
            rating: row.rating,
            comment: row.comment,
            status,
            created_at: row.created_at,
        })
    }
}

/// Repository for storefront review reads.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List approved reviews for a product, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list_approved(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Review>, RepositoryError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            "SELECT id, product_id, customer_id, rating, comment, status, created_at
             FROM shop.reviews
             WHERE product_id = $1 AND status = 'approved'
             ORDER BY created_at DESC",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Review::try_from).collect()
    }

    /// Submit a review. It always enters as `pending` and only becomes
    /// visible once moderation approves it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails and
    /// `RepositoryError::DataCorruption` if the returned row fails
    /// validation.
    pub async fn submit(
        &self,
        product_id: ProductId,
        customer_id: CustomerId,
        rating: i16,
        comment: &str,
    ) -> Result<Review, RepositoryError> {
        let row: ReviewRow = sqlx::query_as(
            "INSERT INTO shop.reviews (product_id, customer_id, rating, comment, status)
             VALUES ($1, $2, $3, $4, 'pending')
             RETURNING id, product_id, customer_id, rating, comment, status, created_at",
        )
        .bind(product_id)
        .bind(customer_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(self.pool)
        .await?;

        Review::try_from(row)
    }
}
