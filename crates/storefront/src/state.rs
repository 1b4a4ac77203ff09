//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::db::{CategoryRepository, ProductRepository, RepositoryError};
use crate::models::{Category, Product};

/// How long cached catalog lookups stay fresh.
const CATALOG_CACHE_TTL: Duration = Duration::from_secs(60);

/// How many featured products the home page shows.
const FEATURED_LIMIT: i64 = 8;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to configuration, the
/// database pool, and short-lived catalog caches.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    categories: Cache<(), Vec<Category>>,
    featured: Cache<(), Vec<Product>>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let categories = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATALOG_CACHE_TTL)
            .build();
        let featured = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATALOG_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                categories,
                featured,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// List categories, served from a short-lived cache.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing query fails on a cache miss.
    pub async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        if let Some(cached) = self.inner.categories.get(&()).await {
            return Ok(cached);
        }

        let categories = CategoryRepository::new(self.pool()).list().await?;
        self.inner.categories.insert((), categories.clone()).await;
        Ok(categories)
    }

    /// List featured products for the home page, served from a short-lived
    /// cache.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the backing query fails on a cache miss.
    pub async fn featured_products(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(cached) = self.inner.featured.get(&()).await {
            return Ok(cached);
        }

        let products = ProductRepository::new(self.pool())
            .list_featured(FEATURED_LIMIT)
            .await?;
        self.inner.featured.insert((), products.clone()).await;
        Ok(products)
    }
}
