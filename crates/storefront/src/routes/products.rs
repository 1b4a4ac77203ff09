//! Product listing and detail.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use magi_core::{CustomerId, ProductId};

use crate::db::{ProductFilter, ProductRepository, ReviewRepository};
use crate::error::{AppError, Result};
use crate::models::{CurrentUser, Product, Review, session_keys};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    /// Category slug to filter by.
    pub category: Option<String>,
    /// Only featured products when true.
    pub featured: Option<bool>,
    /// Case-insensitive name search.
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl From<ProductListQuery> for ProductFilter {
    fn from(q: ProductListQuery) -> Self {
        Self {
            category_slug: q.category,
            featured: q.featured,
            search: q.search,
            min_price: q.min_price,
            max_price: q.max_price,
        }
    }
}

/// Product detail payload: the product plus its approved reviews.
#[derive(Debug, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    pub reviews: Vec<Review>,
}

/// GET /products
#[tracing::instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list(&query.into())
        .await?;

    Ok(Json(products))
}

/// GET /products/{id}
#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductDetailView>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let reviews = ReviewRepository::new(state.pool())
        .list_approved(id)
        .await?;

    Ok(Json(ProductDetailView { product, reviews }))
}

#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    /// Star rating, 1 through 5.
    pub rating: i16,
    pub comment: String,
}

/// POST /products/{id}/reviews
///
/// Requires a logged-in user. The review enters moderation as `pending` and
/// is not visible on the product page until approved.
#[tracing::instrument(skip(state, session, req))]
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<ProductId>,
    Json(req): Json<SubmitReviewRequest>,
) -> Result<Json<Review>> {
    let current: CurrentUser = session
        .get(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
        .ok_or_else(|| AppError::Unauthorized("login required to review".to_owned()))?;

    if !(1..=5).contains(&req.rating) {
        return Err(AppError::BadRequest("rating must be between 1 and 5".to_owned()));
    }
    if req.comment.trim().is_empty() {
        return Err(AppError::BadRequest("comment must not be empty".to_owned()));
    }

    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let review = ReviewRepository::new(state.pool())
        .submit(
            product.id,
            CustomerId::from(current.id.as_uuid()),
            req.rating,
            req.comment.trim(),
        )
        .await?;

    Ok(Json(review))
}
