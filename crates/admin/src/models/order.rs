//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use magi_core::{CustomerId, OrderId, OrderItemId, OrderStatus, PaymentStatus, ProductId};

/// An order header.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    /// Item subtotal plus shipping, captured at order time.
    pub total: Decimal,
    pub shipping_address: String,
    pub shipping_method: Option<String>,
    pub shipping_cost: Decimal,
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line of an order. `price` is the unit price captured at order time;
/// later catalog edits never change it.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    /// Line subtotal.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An order with its items, as the detail screen shows it.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Payload for creating an order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub shipping_address: String,
    pub shipping_method: Option<String>,
    #[serde(default)]
    pub shipping_cost: Decimal,
    pub payment_method: Option<String>,
    pub items: Vec<NewOrderItem>,
}

/// One requested line of a new order. The unit price is read from the
/// catalog at insert time, never from the request.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_subtotal() {
        let item = OrderItem {
            id: OrderItemId::generate(),
            order_id: OrderId::generate(),
            product_id: ProductId::generate(),
            quantity: 3,
            price: "24.99".parse().unwrap(),
        };

        assert_eq!(item.subtotal(), "74.97".parse::<Decimal>().unwrap());
    }
}
