//! Customer management routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use magi_core::CustomerId;

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::models::{Customer, CustomerPatch, NewCustomer};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CustomerListQuery {
    /// Case-insensitive name/email search.
    pub search: Option<String>,
}

/// GET /customers
#[tracing::instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool())
        .list(query.search.as_deref())
        .await?;

    Ok(Json(customers))
}

/// GET /customers/{id}
#[tracing::instrument(skip(state, _admin))]
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;

    Ok(Json(customer))
}

/// POST /customers
#[tracing::instrument(skip(state, admin, new), fields(admin = %admin.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Json(new): Json<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>)> {
    let customer = CustomerRepository::new(state.pool()).create(&new).await?;

    tracing::info!(customer_id = %customer.id, "customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PATCH /customers/{id}
#[tracing::instrument(skip(state, admin, patch), fields(admin = %admin.email))]
pub async fn update(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<CustomerId>,
    Json(patch): Json<CustomerPatch>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool()).update(id, &patch).await?;
    Ok(Json(customer))
}

/// DELETE /customers/{id}
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode> {
    CustomerRepository::new(state.pool()).delete(id).await?;

    tracing::info!(customer_id = %id, "customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
