//! Dashboard counters.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{CustomerRepository, OrderRepository, ProductRepository, ReviewRepository};
use crate::db::products::ProductFilter;
use crate::error::Result;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Store-wide counters for the dashboard landing screen.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub product_count: usize,
    pub low_stock_count: usize,
    pub customer_count: usize,
    pub order_count: i64,
    /// Sum of order totals, cancelled orders excluded.
    pub revenue: Decimal,
    pub pending_review_count: usize,
}

/// GET /dashboard
#[tracing::instrument(skip(state, _admin))]
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<DashboardView>> {
    let pool = state.pool();

    let products = ProductRepository::new(pool)
        .list(&ProductFilter::default())
        .await?;
    let low_stock = ProductRepository::new(pool).list_low_stock(None).await?;
    let customers = CustomerRepository::new(pool).list(None).await?;
    let (order_count, revenue) = OrderRepository::new(pool).stats().await?;
    let pending_reviews = ReviewRepository::new(pool)
        .list(Some(magi_core::ReviewStatus::Pending))
        .await?;

    Ok(Json(DashboardView {
        product_count: products.len(),
        low_stock_count: low_stock.len(),
        customer_count: customers.len(),
        order_count,
        revenue,
        pending_review_count: pending_reviews.len(),
    }))
}
