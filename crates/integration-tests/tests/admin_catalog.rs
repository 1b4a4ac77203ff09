//! Integration tests for admin catalog management and moderation.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p magi-admin)
//! - An admin account created via:
//!   `magi-cli admin create -e it-admin@magi.test -n "IT Admin" -r admin -p <ADMIN_IT_PASSWORD>`
//!   with `ADMIN_IT_EMAIL` / `ADMIN_IT_PASSWORD` exported to match
//!
//! Run with: cargo test -p magi-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use magi_integration_tests::{admin_base_url, session_client};

/// Log in and return a client carrying the admin session cookie.
async fn authenticated_client() -> Client {
    let client = session_client();
    let base_url = admin_base_url();

    let email =
        std::env::var("ADMIN_IT_EMAIL").unwrap_or_else(|_| "it-admin@magi.test".to_string());
    let password = std::env::var("ADMIN_IT_PASSWORD").expect("ADMIN_IT_PASSWORD not set");

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK, "admin login failed");

    client
}

/// Create a category with a unique slug, returning its JSON.
async fn create_test_category(client: &Client) -> Value {
    let base_url = admin_base_url();
    let slug = format!("it-{}", Uuid::new_v4());

    let resp = client
        .post(format!("{base_url}/categories"))
        .json(&json!({ "name": "Integration Test", "slug": slug, "description": null }))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(resp.status(), StatusCode::CREATED);

    resp.json().await.expect("Failed to parse category")
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_routes_require_authentication() {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get products");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_product_crud_lifecycle() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();
    let category = create_test_category(&client).await;

    // Create
    let resp = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "name": "IT Cream Blush",
            "description": "Integration test product",
            "price": "21.00",
            "category_id": category["id"],
            "sku": format!("IT-{}", Uuid::new_v4()),
            "stock": 10,
            "status": "draft",
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Value = resp.json().await.expect("Failed to parse product");
    let product_id = product["id"].as_str().expect("missing id").to_owned();

    // Patch: publish and put on sale
    let resp = client
        .patch(format!("{base_url}/products/{product_id}"))
        .json(&json!({ "status": "active", "sale_price": "18.00" }))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(updated["status"], "active");
    assert_eq!(updated["sale_price"], "18.00");

    // Adjust stock down past zero: clamps, never negative
    let resp = client
        .post(format!("{base_url}/inventory/{product_id}/adjust"))
        .json(&json!({ "delta": -999 }))
        .send()
        .await
        .expect("Failed to adjust stock");
    assert_eq!(resp.status(), StatusCode::OK);
    let adjusted: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(adjusted["stock"], 0);

    // Now it shows up in the low-stock report
    let low_stock: Value = client
        .get(format!("{base_url}/inventory/low-stock"))
        .send()
        .await
        .expect("Failed to get low stock")
        .json()
        .await
        .expect("Failed to parse low stock");
    assert!(
        low_stock
            .as_array()
            .expect("expected array")
            .iter()
            .any(|p| p["id"] == product_id.as_str()),
        "adjusted product missing from low-stock report"
    );

    // Delete
    let resp = client
        .delete(format!("{base_url}/products/{product_id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Cleanup category
    let category_id = category["id"].as_str().expect("missing id");
    let _ = client
        .delete(format!("{base_url}/categories/{category_id}"))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_duplicate_category_slug_conflicts() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();
    let category = create_test_category(&client).await;

    let resp = client
        .post(format!("{base_url}/categories"))
        .json(&json!({ "name": "Duplicate", "slug": category["slug"], "description": null }))
        .send()
        .await
        .expect("Failed to post category");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let category_id = category["id"].as_str().expect("missing id");
    let _ = client
        .delete(format!("{base_url}/categories/{category_id}"))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_review_moderation_queue() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    // The pending queue is readable and every entry really is pending.
    let reviews: Value = client
        .get(format!("{base_url}/reviews?status=pending"))
        .send()
        .await
        .expect("Failed to list reviews")
        .json()
        .await
        .expect("Failed to parse reviews");

    for review in reviews.as_array().expect("expected array") {
        assert_eq!(review["status"], "pending");
    }
}
