//! Review repository for moderation.

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

/// Repository for review moderation.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reviews, newest first, optionally restricted to one moderation
    /// status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<Review>, RepositoryError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            "SELECT id, product_id, customer_id, rating, comment, status, created_at
             FROM shop.reviews
             WHERE $1::text IS NULL OR status = $1
             ORDER BY created_at DESC",
        )
        .bind(status.map(|s| s.to_string()))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Review::try_from).collect()
    }

    /// Set a review's moderation status (approve / reject / re-queue).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the review does not exist.
    pub async fn set_status(
        &self,
        id: ReviewId,
        status: ReviewStatus,
    ) -> Result<Review, RepositoryError> {
        let row: Option<ReviewRow> = sqlx::query_as(
            "UPDATE shop.reviews SET status = $2
             WHERE id = $1
             RETURNING id, product_id, customer_id, rating, comment, status, created_at",
        )
        .bind(id)
        .bind(status.to_string())
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), Review::try_from)
    }

    /// Delete a review outright.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the review does not exist.
    pub async fn delete(&self, id: ReviewId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.reviews WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
