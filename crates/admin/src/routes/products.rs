//! Product management routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use magi_core::{CategoryId, ProductId, ProductStatus};

use crate::db::ProductRepository;
use crate::db::products::ProductFilter;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::models::{NewProduct, Product, ProductPatch};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category_id: Option<CategoryId>,
    pub status: Option<ProductStatus>,
    pub search: Option<String>,
}

/// GET /products
#[tracing::instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = ProductFilter {
        category_id: query.category_id,
        status: query.status,
        search: query.search,
    };
    let products = ProductRepository::new(state.pool()).list(&filter).await?;

    Ok(Json(products))
}

/// GET /products/{id}
#[tracing::instrument(skip(state, _admin))]
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(product))
}

/// POST /products
#[tracing::instrument(skip(state, admin, new), fields(admin = %admin.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Json(new): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    if new.price < rust_decimal::Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_owned()));
    }

    let product = ProductRepository::new(state.pool()).create(&new).await?;

    tracing::info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /products/{id}
#[tracing::instrument(skip(state, admin, patch), fields(admin = %admin.email))]
pub async fn update(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    if patch.price.is_some_and(|p| p < rust_decimal::Decimal::ZERO) {
        return Err(AppError::BadRequest("price must not be negative".to_owned()));
    }

    let product = ProductRepository::new(state.pool()).update(id, &patch).await?;

    Ok(Json(product))
}

/// DELETE /products/{id}
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.pool()).delete(id).await?;

    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
