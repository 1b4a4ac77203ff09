//! Category listing and category pages.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::db::{CategoryRepository, ProductFilter, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::{Category, Product};
use crate::state::AppState;

/// Category page payload: the category plus its active products.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub products: Vec<Product>,
}

/// GET /categories
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.categories().await?;
    Ok(Json(categories))
}

/// GET /categories/{slug}
#[tracing::instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryView>> {
    let category = CategoryRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {slug}")))?;

    let filter = ProductFilter {
        category_slug: Some(slug),
        ..ProductFilter::default()
    };
    let products = ProductRepository::new(state.pool()).list(&filter).await?;

    Ok(Json(CategoryView { category, products }))
}
