//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Home
//! GET  /home                   - Featured products + categories
//!
//! # Catalog
//! GET  /products               - Product listing (filters via query string)
//! GET  /products/{id}          - Product detail with approved reviews
//! POST /products/{id}/reviews  - Submit a review (enters moderation)
//! GET  /categories             - Category listing
//! GET  /categories/{slug}      - Category with its products
//!
//! # Cart
//! GET  /cart                   - Current cart
//! POST /cart/add               - Add a product (quantity +1 on repeats)
//! POST /cart/update            - Replace a line quantity (<= 0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart badge count
//!
//! # Favorites
//! GET  /favorites              - Favorited products
//! POST /favorites/add          - Mark favorite (idempotent)
//! POST /favorites/remove       - Unmark favorite
//! GET  /favorites/count        - Favorites badge count
//!
//! # Auth
//! POST /auth/register          - Create account
//! POST /auth/login             - Login
//! POST /auth/logout            - Logout
//! GET  /auth/session           - Current user (null when logged out)
//! ```
//!
//! There is no checkout route: checkout is out of scope for this service.

pub mod auth;
pub mod cart;
pub mod categories;
pub mod favorites;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/reviews", post(products::submit_review))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{slug}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index))
        .route("/add", post(favorites::add))
        .route("/remove", post(favorites::remove))
        .route("/count", get(favorites::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::home))
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
        .nest("/auth", auth_routes())
}
