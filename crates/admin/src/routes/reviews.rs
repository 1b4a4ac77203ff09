//! Review moderation routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use magi_core::{ReviewId, ReviewStatus};

use crate::db::ReviewRepository;
use crate::error::Result;
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::models::Review;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    pub status: Option<ReviewStatus>,
}

/// GET /reviews
#[tracing::instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<Vec<Review>>> {
    let reviews = ReviewRepository::new(state.pool()).list(query.status).await?;
    Ok(Json(reviews))
}

/// POST /reviews/{id}/approve
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn approve(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<ReviewId>,
) -> Result<Json<Review>> {
    let review = ReviewRepository::new(state.pool())
        .set_status(id, ReviewStatus::Approved)
        .await?;

    tracing::info!(review_id = %id, "review approved");
    Ok(Json(review))
}

/// POST /reviews/{id}/reject
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn reject(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<ReviewId>,
) -> Result<Json<Review>> {
    let review = ReviewRepository::new(state.pool())
        .set_status(id, ReviewStatus::Rejected)
        .await?;

    tracing::info!(review_id = %id, "review rejected");
    Ok(Json(review))
}

/// DELETE /reviews/{id}
#[tracing::instrument(skip(state, admin), fields(admin = %admin.email))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireWriteAccess(admin): RequireWriteAccess,
    Path(id): Path<ReviewId>,
) -> Result<StatusCode> {
    ReviewRepository::new(state.pool()).delete(id).await?;

    tracing::info!(review_id = %id, "review deleted");
    Ok(StatusCode::NO_CONTENT)
}
