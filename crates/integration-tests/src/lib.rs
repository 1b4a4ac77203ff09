//! Integration tests for Magi.
//!
//! Tests in `tests/` drive the real HTTP APIs of running services, so they
//! are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and seed data
//! cargo run -p magi-cli -- migrate all
//! cargo run -p magi-cli -- seed
//!
//! # Start both services, then:
//! cargo test -p magi-integration-tests -- --ignored
//! ```

use reqwest::Client;

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create an HTTP client with a cookie store, so the session cookie set on
/// the first request rides along on the rest of the flow.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
