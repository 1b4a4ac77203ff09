//! Order management routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use magi_core::{CustomerId, OrderId, OrderStatus, PaymentStatus};

use crate::db::OrderRepository;
use crate::db::orders::OrderFilter;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::models::{NewOrder, Order, OrderWithItems};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<CustomerId>,
}

/// GET /orders
#[tracing::instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<Order>>> {
    let filter = OrderFilter {
        status: query.status,
        customer_id: query.customer_id,
    };
    let orders = OrderRepository::new(state.pool()).list(filter).await?;

    Ok(Json(orders))
}

/// GET /orders/{id}
#[tracing::instrument(skip(state, _admin))]
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderWithItems>> {
    let order = OrderRepository::new(state.pool())
        .get_with_items(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(order))
}

/// POST /orders
#[tracing::instrument(skip(state, admin, new), fields(admin = %admin.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Json(new): Json<NewOrder>,
) -> Result<(StatusCode, Json<OrderWithItems>)> {
    let order = OrderRepository::new(state.pool()).create(&new).await?;

    tracing::info!(order_id = %order.order.id, total = %order.order.total, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: OrderStatus,
}

/// POST /orders/{id}/status
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<OrderId>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .update_status(id, req.status)
        .await?;

    tracing::info!(order_id = %id, status = %req.status, "order status updated");
    Ok(Json(order))
}

#[derive(Debug, Deserialize)]
pub struct PaymentStatusRequest {
    pub payment_status: PaymentStatus,
}

/// POST /orders/{id}/payment-status
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn update_payment_status(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<OrderId>,
    Json(req): Json<PaymentStatusRequest>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .update_payment_status(id, req.payment_status)
        .await?;

    tracing::info!(order_id = %id, payment_status = %req.payment_status, "payment status updated");
    Ok(Json(order))
}
