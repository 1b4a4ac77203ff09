//! Inventory routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use magi_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::models::Product;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LowStockQuery {
    /// Explicit bound applied to every product; omitted, each product's own
    /// `low_stock_threshold` decides.
    pub threshold: Option<i32>,
}

/// GET /inventory/low-stock
#[tracing::instrument(skip(state, _admin))]
pub async fn low_stock(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<LowStockQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_low_stock(query.threshold)
        .await?;

    Ok(Json(products))
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    /// Signed change; the resulting stock is clamped at zero.
    pub delta: i32,
}

/// POST /inventory/{id}/adjust
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn adjust(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<ProductId>,
    Json(req): Json<AdjustStockRequest>,
) -> Result<Json<Product>> {
    if req.delta == 0 {
        return Err(AppError::BadRequest("delta must not be zero".to_owned()));
    }

    let product = ProductRepository::new(state.pool())
        .adjust_stock(id, req.delta)
        .await?;

    tracing::info!(product_id = %id, delta = req.delta, stock = product.stock, "stock adjusted");
    Ok(Json(product))
}
