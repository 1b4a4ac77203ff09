//! Cart routes.
//!
//! Every mutation loads the session-backed store, applies the transition,
//! and responds with the full cart view so the client can re-render without
//! a second round trip. Prices come from the catalog at add time, never from
//! the request body.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_sessions::Session;

use magi_core::{Cart, CartLine, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::services::cart::CartSession;
use crate::state::AppState;

/// The cart as the client renders it.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub count: u64,
    pub total: Decimal,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            count: cart.count(),
            total: cart.total(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub product_id: ProductId,
    /// Replacement quantity; zero or below removes the line.
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// GET /cart
#[tracing::instrument(skip_all)]
pub async fn show(session: Session) -> Json<CartView> {
    let store = CartSession::load(session).await;
    Json(CartView::from(store.cart()))
}

/// POST /cart/add
#[tracing::instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = ProductRepository::new(state.pool())
        .get(req.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", req.product_id)))?;

    let mut store = CartSession::load(session).await;
    store.add_to_cart(product.to_cart_line()).await;

    Ok(Json(CartView::from(store.cart())))
}

/// POST /cart/update
#[tracing::instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<CartView>> {
    let mut store = CartSession::load(session).await;
    store.update_quantity(req.product_id, req.quantity).await;

    Ok(Json(CartView::from(store.cart())))
}

/// POST /cart/remove
#[tracing::instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(req): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let mut store = CartSession::load(session).await;
    store.remove_from_cart(req.product_id).await;

    Ok(Json(CartView::from(store.cart())))
}

/// POST /cart/clear
#[tracing::instrument(skip_all)]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    let mut store = CartSession::load(session).await;
    store.clear_cart().await;

    Ok(Json(CartView::from(store.cart())))
}

/// GET /cart/count
#[tracing::instrument(skip_all)]
pub async fn count(session: Session) -> Json<Value> {
    let store = CartSession::load(session).await;
    Json(json!({ "count": store.cart().count() }))
}
