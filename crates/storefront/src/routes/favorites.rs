//! Favorites routes.
//!
//! Favorites store only product ids; the listing resolves them against the
//! catalog so the client always sees current names and prices. Ids pointing
//! at products that have since gone inactive simply drop out of the listing.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use magi_core::ProductId;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::services::cart::CartSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub product_id: ProductId,
}

/// GET /favorites
#[tracing::instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Product>>> {
    let store = CartSession::load(session).await;
    let products = ProductRepository::new(state.pool())
        .list_by_ids(store.favorites().ids())
        .await?;

    Ok(Json(products))
}

/// POST /favorites/add
#[tracing::instrument(skip(session))]
pub async fn add(session: Session, Json(req): Json<FavoriteRequest>) -> Json<Value> {
    let mut store = CartSession::load(session).await;
    store.add_to_favorites(req.product_id).await;

    Json(json!({ "count": store.favorites().len() }))
}

/// POST /favorites/remove
#[tracing::instrument(skip(session))]
pub async fn remove(session: Session, Json(req): Json<FavoriteRequest>) -> Json<Value> {
    let mut store = CartSession::load(session).await;
    store.remove_from_favorites(req.product_id).await;

    Json(json!({ "count": store.favorites().len() }))
}

/// GET /favorites/count
#[tracing::instrument(skip_all)]
pub async fn count(session: Session) -> Json<Value> {
    let store = CartSession::load(session).await;
    Json(json!({ "count": store.favorites().len() }))
}
