//! Home page data.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Category, Product};
use crate::state::AppState;

/// Home page payload: the featured carousel plus category navigation.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub featured: Vec<Product>,
    pub categories: Vec<Category>,
}

/// GET /home
#[tracing::instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomeView>> {
    let featured = state.featured_products().await?;
    let categories = state.categories().await?;

    Ok(Json(HomeView {
        featured,
        categories,
    }))
}
