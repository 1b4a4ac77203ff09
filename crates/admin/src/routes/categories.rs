//! Category management routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use magi_core::CategoryId;

use crate::db::CategoryRepository;
use crate::error::Result;
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::models::{Category, NewCategory};
use crate::state::AppState;

/// GET /categories
#[tracing::instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// POST /categories
#[tracing::instrument(skip(state, admin, new), fields(admin = %admin.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Json(new): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = CategoryRepository::new(state.pool()).create(&new).await?;

    tracing::info!(category_id = %category.id, slug = %category.slug, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/{id}
#[tracing::instrument(skip(state, admin, new), fields(admin = %admin.email))]
pub async fn update(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<CategoryId>,
    Json(new): Json<NewCategory>,
) -> Result<Json<Category>> {
    let category = CategoryRepository::new(state.pool()).update(id, &new).await?;
    Ok(Json(category))
}

/// DELETE /categories/{id}
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    CategoryRepository::new(state.pool()).delete(id).await?;

    tracing::info!(category_id = %id, "category deleted");
    Ok(StatusCode::NO_CONTENT)
}
