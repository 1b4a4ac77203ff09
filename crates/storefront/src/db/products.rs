//! Product repository for the storefront catalog.
//!
//! Read-only: the storefront never writes catalog data. Only `active`
//! products are visible here; drafts and archived products are admin-only.

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use magi_core::{CategoryId, ProductId, ProductStatus};

use super::RepositoryError;
use crate::models::Product;

/// Filters for the product listing, driven by the category page sidebar.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to one category by slug.
    pub category_slug: Option<String>,
    /// Restrict to featured products.
    pub featured: Option<bool>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<rust_decimal::Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<rust_decimal::Decimal>,
}

/// Raw product row joined with its category name.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: String,
    price: rust_decimal::Decimal,
    sale_price: Option<rust_decimal::Decimal>,
    category_id: CategoryId,
    category_label: String,
    sku: String,
    stock: i32,
    status: String,
    featured: bool,
    images: Option<Vec<String>>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let status: ProductStatus = row.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("product {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            sale_price: row.sale_price,
            category_id: row.category_id,
            category_label: row.category_label,
            sku: row.sku,
            stock: row.stock,
            status,
            featured: row.featured,
            images: row.images.unwrap_or_default(),
            created_at: row.created_at,
        })
    }
}

const SELECT_PRODUCT: &str = "
    SELECT p.id, p.name, p.description, p.price, p.sale_price, p.category_id,
           c.name AS category_label, p.sku, p.stock, p.status, p.featured,
           p.images, p.created_at
    FROM shop.products p
    JOIN shop.categories c ON c.id = p.category_id
";

/// Repository for storefront product reads.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active products, newest first, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let mut query = QueryBuilder::new(SELECT_PRODUCT);
        query.push(" WHERE p.status = 'active'");

        if let Some(slug) = &filter.category_slug {
            query.push(" AND c.slug = ");
            query.push_bind(slug);
        }
        if let Some(featured) = filter.featured {
            query.push(" AND p.featured = ");
            query.push_bind(featured);
        }
        if let Some(search) = &filter.search {
            query.push(" AND p.name ILIKE ");
            query.push_bind(format!("%{search}%"));
        }
        if let Some(min) = filter.min_price {
            query.push(" AND COALESCE(p.sale_price, p.price) >= ");
            query.push_bind(min);
        }
        if let Some(max) = filter.max_price {
            query.push(" AND COALESCE(p.sale_price, p.price) <= ");
            query.push_bind(max);
        }

        query.push(" ORDER BY p.created_at DESC");

        let rows: Vec<ProductRow> = query.build_query_as().fetch_all(self.pool).await?;
        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get an active product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if the row fails validation.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = $1 AND p.status = 'active'");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// List active products matching a set of ids (the favorites view).
    ///
    /// Missing or inactive ids are silently dropped from the result.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(|id| id.as_uuid()).collect();
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = ANY($1) AND p.status = 'active'");
        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(&uuids)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// List featured active products for the home page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list_featured(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "{SELECT_PRODUCT} WHERE p.status = 'active' AND p.featured
             ORDER BY p.created_at DESC LIMIT $1"
        );
        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
