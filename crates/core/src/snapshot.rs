//! Durable snapshot codec for cart and favorites state.
//!
//! State is mirrored to two independently keyed JSON blobs: the cart as an
//! array of line records and the favorites as an array of id strings. There
//! is no version tag and no migration path; a malformed blob is treated as
//! absent and decodes to the empty value. Worst case is losing one visitor's
//! unsaved cart, never a failed request.

use serde::Serialize;

use crate::cart::Cart;
use crate::favorites::FavoriteSet;

/// Storage key for the serialized cart blob.
pub const CART_KEY: &str = "cart";

/// Storage key for the serialized favorites blob.
pub const FAVORITES_KEY: &str = "favorites";

/// Serialize a value to its snapshot form.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails. Callers treat this as
/// a best-effort persistence failure: log it and keep the in-memory state
/// authoritative.
pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Decode a cart snapshot, treating anything malformed as an empty cart.
#[must_use]
pub fn decode_cart(blob: Option<&str>) -> Cart {
    blob.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Decode a favorites snapshot, treating anything malformed as empty.
#[must_use]
pub fn decode_favorites(blob: Option<&str>) -> FavoriteSet {
    blob.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::cart::CartLine;
    use crate::types::ProductId;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartLine {
            product_id: ProductId::generate(),
            display_name: "Velvet Lip Stain".to_owned(),
            unit_price: "24.99".parse::<Decimal>().unwrap(),
            quantity: 1,
            image_ref: "https://cdn.magi.example/lip-stain.jpg".to_owned(),
            category_label: "Lips".to_owned(),
        });
        cart.add(CartLine {
            product_id: ProductId::generate(),
            display_name: "Volumizing Mascara".to_owned(),
            unit_price: "19.99".parse::<Decimal>().unwrap(),
            quantity: 1,
            image_ref: "https://cdn.magi.example/mascara.jpg".to_owned(),
            category_label: "Eyes".to_owned(),
        });
        cart
    }

    #[test]
    fn test_cart_roundtrip() {
        let cart = sample_cart();
        let blob = encode(&cart).unwrap();

        // Discard the in-memory state and rehydrate from the blob.
        let rehydrated = decode_cart(Some(&blob));
        assert_eq!(rehydrated, cart);
        assert_eq!(rehydrated.total(), cart.total());
    }

    #[test]
    fn test_favorites_roundtrip() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(ProductId::generate());
        favorites.insert(ProductId::generate());

        let blob = encode(&favorites).unwrap();
        let rehydrated = decode_favorites(Some(&blob));
        assert_eq!(rehydrated, favorites);
    }

    #[test]
    fn test_cart_blob_is_a_plain_array() {
        let blob = encode(&sample_cart()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_absent_blob_decodes_empty() {
        assert!(decode_cart(None).is_empty());
        assert!(decode_favorites(None).is_empty());
    }

    #[test]
    fn test_corrupt_blob_decodes_empty() {
        for garbage in ["{not json", "42", "{\"cart\":[]}", "\"hello\"", ""] {
            assert!(decode_cart(Some(garbage)).is_empty(), "blob: {garbage}");
            assert!(
                decode_favorites(Some(garbage)).is_empty(),
                "blob: {garbage}"
            );
        }
    }

    #[test]
    fn test_partially_malformed_line_rejects_whole_blob() {
        // A line missing required fields invalidates the snapshot; the store
        // starts empty rather than guessing.
        let blob = r#"[{"product_id":"not-a-uuid","quantity":2}]"#;
        assert!(decode_cart(Some(blob)).is_empty());
    }
}
