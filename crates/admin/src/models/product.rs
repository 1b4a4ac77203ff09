//! Product models for catalog management.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use magi_core::{CategoryId, ProductId, ProductStatus};

/// A catalog product as the back office sees it: every status, plus the
/// inventory fields the storefront never shows.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub category_id: CategoryId,
    pub sku: String,
    pub stock: i32,
    /// Stock level at which this product shows up in the low-stock report.
    pub low_stock_threshold: i32,
    pub status: ProductStatus,
    pub featured: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether current stock is at or below the reorder point.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < self.low_stock_threshold
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub category_id: CategoryId,
    pub sku: String,
    #[serde(default)]
    pub stock: i32,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i32,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for a product. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    /// `Some(None)` clears the sale price.
    #[serde(default, with = "double_option")]
    pub sale_price: Option<Option<Decimal>>,
    pub category_id: Option<CategoryId>,
    pub sku: Option<String>,
    pub stock: Option<i32>,
    pub low_stock_threshold: Option<i32>,
    pub status: Option<ProductStatus>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
}

const fn default_low_stock_threshold() -> i32 {
    5
}

/// Distinguishes "field absent" from "field explicitly null" when
/// deserializing a patch.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_low_stock_uses_per_product_threshold() {
        let mut product = Product {
            id: ProductId::generate(),
            name: "Volumizing Mascara".to_owned(),
            description: String::new(),
            price: "19.99".parse().unwrap(),
            sale_price: None,
            category_id: CategoryId::generate(),
            sku: "MAGI-MA-001".to_owned(),
            stock: 4,
            low_stock_threshold: 5,
            status: ProductStatus::Active,
            featured: false,
            images: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(product.is_low_stock());

        product.stock = 5;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null_sale_price() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": "29.99"}"#).unwrap();
        assert!(patch.sale_price.is_none());

        let patch: ProductPatch = serde_json::from_str(r#"{"sale_price": null}"#).unwrap();
        assert_eq!(patch.sale_price, Some(None));

        let patch: ProductPatch = serde_json::from_str(r#"{"sale_price": "9.99"}"#).unwrap();
        assert_eq!(patch.sale_price, Some(Some("9.99".parse().unwrap())));
    }
}
