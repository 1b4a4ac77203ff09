//! Product repository for catalog management.
//!
//! Unlike the storefront, the admin sees every status and owns the writes.

use sqlx::{PgPool, QueryBuilder};

use magi_core::{CategoryId, ProductId, ProductStatus};

use super::RepositoryError;
use crate::models::{NewProduct, Product, ProductPatch};

/// Filters for the admin product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub status: Option<ProductStatus>,
    /// Case-insensitive substring match on name or SKU.
    pub search: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: String,
    price: rust_decimal::Decimal,
    sale_price: Option<rust_decimal::Decimal>,
    category_id: CategoryId,
    sku: String,
    stock: i32,
    low_stock_threshold: i32,
    status: String,
    featured: bool,
    images: Option<Vec<String>>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let status: ProductStatus = row
            .status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("product {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            sale_price: row.sale_price,
            category_id: row.category_id,
            sku: row.sku,
            stock: row.stock,
            low_stock_threshold: row.low_stock_threshold,
            status,
            featured: row.featured,
            images: row.images.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_PRODUCT: &str = "
    SELECT id, name, description, price, sale_price, category_id, sku, stock,
           low_stock_threshold, status, featured, images, created_at, updated_at
    FROM shop.products
";

/// Repository for catalog product management.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, newest first, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let mut query = QueryBuilder::new(SELECT_PRODUCT);
        query.push(" WHERE TRUE");

        if let Some(category_id) = filter.category_id {
            query.push(" AND category_id = ");
            query.push_bind(category_id);
        }
        if let Some(status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status.to_string());
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query.push(" AND (name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR sku ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        query.push(" ORDER BY created_at DESC");

        let rows: Vec<ProductRow> = query.build_query_as().fetch_all(self.pool).await?;
        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if the row fails validation.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{SELECT_PRODUCT} WHERE id = $1");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate SKU or an unknown
    /// category, `RepositoryError::Database` for other failures.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(
            "INSERT INTO shop.products
                 (name, description, price, sale_price, category_id, sku, stock,
                  low_stock_threshold, status, featured, images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id, name, description, price, sale_price, category_id, sku,
                       stock, low_stock_threshold, status, featured, images,
                       created_at, updated_at",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.sale_price)
        .bind(new.category_id)
        .bind(&new.sku)
        .bind(new.stock)
        .bind(new.low_stock_threshold)
        .bind(new.status.to_string())
        .bind(new.featured)
        .bind(&new.images)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "duplicate sku or unknown category"))?;

        Product::try_from(row)
    }

    /// Apply a partial update. Absent patch fields keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist,
    /// `RepositoryError::Conflict` on a duplicate SKU or unknown category.
    pub async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "UPDATE shop.products SET
                 name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 price = COALESCE($4, price),
                 sale_price = CASE WHEN $5 THEN $6 ELSE sale_price END,
                 category_id = COALESCE($7, category_id),
                 sku = COALESCE($8, sku),
                 stock = COALESCE($9, stock),
                 low_stock_threshold = COALESCE($10, low_stock_threshold),
                 status = COALESCE($11, status),
                 featured = COALESCE($12, featured),
                 images = COALESCE($13, images),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, name, description, price, sale_price, category_id, sku,
                       stock, low_stock_threshold, status, featured, images,
                       created_at, updated_at",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.price)
        .bind(patch.sale_price.is_some())
        .bind(patch.sale_price.flatten())
        .bind(patch.category_id)
        .bind(patch.sku.as_deref())
        .bind(patch.stock)
        .bind(patch.low_stock_threshold)
        .bind(patch.status.map(|s| s.to_string()))
        .bind(patch.featured)
        .bind(patch.images.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "duplicate sku or unknown category"))?;

        row.map_or(Err(RepositoryError::NotFound), Product::try_from)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist and
    /// `RepositoryError::Conflict` if order lines still reference it.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| RepositoryError::from_sqlx(e, "product is referenced by orders"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Adjust stock by a signed delta, clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist.
    pub async fn adjust_stock(
        &self,
        id: ProductId,
        delta: i32,
    ) -> Result<Product, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "UPDATE shop.products
             SET stock = GREATEST(stock + $2, 0), updated_at = now()
             WHERE id = $1
             RETURNING id, name, description, price, sale_price, category_id, sku,
                       stock, low_stock_threshold, status, featured, images,
                       created_at, updated_at",
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), Product::try_from)
    }

    /// List products whose stock has fallen below the reorder point.
    ///
    /// With `threshold` set, that explicit bound applies to every product;
    /// otherwise each product's own `low_stock_threshold` decides.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list_low_stock(
        &self,
        threshold: Option<i32>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "{SELECT_PRODUCT}
             WHERE status <> 'archived'
               AND stock < COALESCE($1, low_stock_threshold)
             ORDER BY stock ASC, name ASC"
        );
        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(threshold)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
