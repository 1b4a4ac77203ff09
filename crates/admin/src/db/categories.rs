//! Category repository for catalog management.

use sqlx::PgPool;

use magi_core::CategoryId;

use super::RepositoryError;
use crate::models::{Category, NewCategory};

/// Repository for category management.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as(
            "SELECT id, name, slug, description, created_at
             FROM shop.categories
             ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a category by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as(
            "SELECT id, name, slug, description, created_at
             FROM shop.categories
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Insert a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already taken.
    pub async fn create(&self, new: &NewCategory) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as(
            "INSERT INTO shop.categories (name, slug, description)
             VALUES ($1, $2, $3)
             RETURNING id, name, slug, description, created_at",
        )
        .bind(&new.name)
        .bind(&new.slug)
        .bind(new.description.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "slug already exists"))?;

        Ok(category)
    }

    /// Replace a category's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category does not exist
    /// and `RepositoryError::Conflict` if the new slug is taken.
    pub async fn update(
        &self,
        id: CategoryId,
        new: &NewCategory,
    ) -> Result<Category, RepositoryError> {
        let category: Option<Category> = sqlx::query_as(
            "UPDATE shop.categories
             SET name = $2, slug = $3, description = $4
             WHERE id = $1
             RETURNING id, name, slug, description, created_at",
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.slug)
        .bind(new.description.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "slug already exists"))?;

        category.ok_or(RepositoryError::NotFound)
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category does not exist
    /// and `RepositoryError::Conflict` if products still reference it.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(e, "category still has products"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
