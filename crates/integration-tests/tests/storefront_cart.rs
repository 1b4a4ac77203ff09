//! Integration tests for the storefront cart and favorites flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - Seeded catalog data (cargo run -p magi-cli -- seed)
//! - The storefront server running (cargo run -p magi-storefront)
//!
//! Run with: cargo test -p magi-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use magi_integration_tests::{session_client, storefront_base_url};

/// Pick any active product id from the catalog.
async fn any_product_id(client: &Client) -> String {
    let base_url = storefront_base_url();
    let products: Value = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to parse products");

    products[0]["id"]
        .as_str()
        .expect("catalog is empty; run the seed command first")
        .to_owned()
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded catalog"]
async fn test_cart_starts_empty() {
    let client = session_client();
    let base_url = storefront_base_url();

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");

    assert_eq!(cart["count"], 0);
    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded catalog"]
async fn test_repeated_add_increments_quantity() {
    let client = session_client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/cart/add"))
            .json(&json!({ "product_id": product_id }))
            .send()
            .await
            .expect("Failed to add to cart");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");

    // One line, quantity 2
    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart["lines"][0]["quantity"], 2);
    assert_eq!(cart["count"], 2);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded catalog"]
async fn test_update_to_zero_removes_line() {
    let client = session_client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("Failed to add to cart");

    let cart: Value = client
        .post(format!("{base_url}/cart/update"))
        .json(&json!({ "product_id": product_id, "quantity": 0 }))
        .send()
        .await
        .expect("Failed to update quantity")
        .json()
        .await
        .expect("Failed to parse cart");

    assert_eq!(cart["count"], 0);
    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded catalog"]
async fn test_cart_survives_across_requests() {
    let client = session_client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("Failed to add to cart");

    // A separate request on the same session sees the same cart.
    let count: Value = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to get count")
        .json()
        .await
        .expect("Failed to parse count");

    assert_eq!(count["count"], 1);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded catalog"]
async fn test_add_unknown_product_is_rejected() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({ "product_id": uuid::Uuid::new_v4() }))
        .send()
        .await
        .expect("Failed to post");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded catalog"]
async fn test_favorites_are_idempotent() {
    let client = session_client();
    let base_url = storefront_base_url();
    let product_id = any_product_id(&client).await;

    for _ in 0..2 {
        client
            .post(format!("{base_url}/favorites/add"))
            .json(&json!({ "product_id": product_id }))
            .send()
            .await
            .expect("Failed to add favorite");
    }

    let count: Value = client
        .get(format!("{base_url}/favorites/count"))
        .send()
        .await
        .expect("Failed to get count")
        .json()
        .await
        .expect("Failed to parse count");

    assert_eq!(count["count"], 1);

    let favorites: Value = client
        .get(format!("{base_url}/favorites"))
        .send()
        .await
        .expect("Failed to list favorites")
        .json()
        .await
        .expect("Failed to parse favorites");

    assert_eq!(favorites.as_array().map(Vec::len), Some(1));
    assert_eq!(favorites[0]["id"], product_id.as_str());
}
