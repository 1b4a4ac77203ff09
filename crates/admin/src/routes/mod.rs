//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                      - Liveness check
//! GET    /health/ready                - Readiness check (verifies database)
//!
//! # Auth
//! POST   /auth/login                  - Admin login
//! POST   /auth/logout                 - Admin logout
//! GET    /auth/session                - Current admin (null when logged out)
//!
//! # Dashboard
//! GET    /dashboard                   - Store-wide counters
//!
//! # Catalog
//! GET    /products                    - List (filters via query string)
//! POST   /products                    - Create (write roles)
//! GET    /products/{id}               - Detail
//! PATCH  /products/{id}               - Partial update (write roles)
//! DELETE /products/{id}               - Delete (write roles)
//! GET    /categories                  - List
//! POST   /categories                  - Create (write roles)
//! PUT    /categories/{id}             - Replace (write roles)
//! DELETE /categories/{id}             - Delete (write roles)
//!
//! # Customers
//! GET    /customers                   - List / search
//! POST   /customers                   - Create (write roles)
//! GET    /customers/{id}              - Detail
//! PATCH  /customers/{id}              - Partial update (write roles)
//! DELETE /customers/{id}              - Delete (write roles)
//!
//! # Orders
//! GET    /orders                      - List (filters via query string)
//! POST   /orders                      - Create with items (write roles)
//! GET    /orders/{id}                 - Detail with items
//! POST   /orders/{id}/status          - Fulfillment status (write roles)
//! POST   /orders/{id}/payment-status  - Payment status (write roles)
//!
//! # Inventory
//! GET    /inventory/low-stock         - Products below reorder point
//! POST   /inventory/{id}/adjust       - Adjust stock by delta (write roles)
//!
//! # Reviews
//! GET    /reviews                     - Moderation queue (filter by status)
//! POST   /reviews/{id}/approve        - Approve (write roles)
//! POST   /reviews/{id}/reject         - Reject (write roles)
//! DELETE /reviews/{id}                - Delete (write roles)
//!
//! # Admin users (super admin only)
//! GET    /admin-users                 - List
//! POST   /admin-users                 - Grant access
//! POST   /admin-users/{id}/role       - Change role
//! DELETE /admin-users/{id}            - Revoke access
//! ```

pub mod admin_users;
pub mod auth;
pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod reviews;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/auth",
            Router::new()
                .route("/login", post(auth::login))
                .route("/logout", post(auth::logout))
                .route("/session", get(auth::session)),
        )
        .route("/dashboard", get(dashboard::show))
        .nest(
            "/products",
            Router::new()
                .route("/", get(products::index).post(products::create))
                .route(
                    "/{id}",
                    get(products::show)
                        .patch(products::update)
                        .delete(products::destroy),
                ),
        )
        .nest(
            "/categories",
            Router::new()
                .route("/", get(categories::index).post(categories::create))
                .route(
                    "/{id}",
                    axum::routing::put(categories::update).delete(categories::destroy),
                ),
        )
        .nest(
            "/customers",
            Router::new()
                .route("/", get(customers::index).post(customers::create))
                .route(
                    "/{id}",
                    get(customers::show)
                        .patch(customers::update)
                        .delete(customers::destroy),
                ),
        )
        .nest(
            "/orders",
            Router::new()
                .route("/", get(orders::index).post(orders::create))
                .route("/{id}", get(orders::show))
                .route("/{id}/status", post(orders::update_status))
                .route("/{id}/payment-status", post(orders::update_payment_status)),
        )
        .nest(
            "/inventory",
            Router::new()
                .route("/low-stock", get(inventory::low_stock))
                .route("/{id}/adjust", post(inventory::adjust)),
        )
        .nest(
            "/reviews",
            Router::new()
                .route("/", get(reviews::index))
                .route("/{id}", delete(reviews::destroy))
                .route("/{id}/approve", post(reviews::approve))
                .route("/{id}/reject", post(reviews::reject)),
        )
        .nest(
            "/admin-users",
            Router::new()
                .route("/", get(admin_users::index).post(admin_users::create))
                .route("/{id}", delete(admin_users::destroy))
                .route("/{id}/role", post(admin_users::set_role)),
        )
}
