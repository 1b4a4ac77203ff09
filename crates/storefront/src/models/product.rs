//! Product model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use magi_core::{CartLine, CategoryId, ProductId, ProductStatus};

/// A catalog product as the storefront sees it.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub category_id: CategoryId,
    /// Category name, denormalized for display.
    pub category_label: String,
    pub sku: String,
    pub stock: i32,
    pub status: ProductStatus,
    pub featured: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price a buyer pays right now: the sale price when one is set.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.sale_price.unwrap_or(self.price)
    }

    /// Build a cart line for this product, capturing display attributes at
    /// add time.
    #[must_use]
    pub fn to_cart_line(&self) -> CartLine {
        CartLine {
            product_id: self.id,
            display_name: self.name.clone(),
            unit_price: self.effective_price(),
            quantity: 1,
            image_ref: self.images.first().cloned().unwrap_or_default(),
            category_label: self.category_label.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(price: &str, sale: Option<&str>) -> Product {
        Product {
            id: ProductId::generate(),
            name: "Velvet Lip Stain".to_owned(),
            description: "Long-wear matte lip stain".to_owned(),
            price: price.parse().unwrap(),
            sale_price: sale.map(|s| s.parse().unwrap()),
            category_id: CategoryId::generate(),
            category_label: "Lips".to_owned(),
            sku: "MAGI-LS-001".to_owned(),
            stock: 20,
            status: ProductStatus::Active,
            featured: false,
            images: vec!["https://cdn.magi.example/lip-stain.jpg".to_owned()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_prefers_sale() {
        let p = product("24.99", Some("19.99"));
        assert_eq!(p.effective_price(), "19.99".parse::<Decimal>().unwrap());

        let p = product("24.99", None);
        assert_eq!(p.effective_price(), "24.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_to_cart_line_captures_display_attributes() {
        let p = product("24.99", Some("19.99"));
        let line = p.to_cart_line();

        assert_eq!(line.product_id, p.id);
        assert_eq!(line.display_name, "Velvet Lip Stain");
        assert_eq!(line.unit_price, p.effective_price());
        assert_eq!(line.quantity, 1);
        assert_eq!(line.category_label, "Lips");
        assert_eq!(line.image_ref, "https://cdn.magi.example/lip-stain.jpg");
    }

    #[test]
    fn test_to_cart_line_without_images() {
        let mut p = product("24.99", None);
        p.images.clear();
        assert_eq!(p.to_cart_line().image_ref, "");
    }
}
