//! Order repository.
//!
//! Order creation is a single transaction: unit prices are read from the
//! catalog, stock is decremented, and the header total is computed from the
//! inserted lines. A failure anywhere rolls the whole order back.

use rust_decimal::Decimal;
use sqlx::PgPool;

use magi_core::{CustomerId, OrderId, OrderItemId, OrderStatus, PaymentStatus, ProductId};

use super::RepositoryError;
use crate::models::{NewOrder, Order, OrderItem, OrderWithItems};

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    customer_id: CustomerId,
    status: String,
    total: Decimal,
    shipping_address: String,
    shipping_method: Option<String>,
    shipping_cost: Decimal,
    payment_method: Option<String>,
    payment_status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row
            .status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("order {}: {e}", row.id)))?;
        let payment_status: PaymentStatus = row
            .payment_status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("order {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            customer_id: row.customer_id,
            status,
            total: row.total,
            shipping_address: row.shipping_address,
            shipping_method: row.shipping_method,
            shipping_cost: row.shipping_cost,
            payment_method: row.payment_method,
            payment_status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: OrderItemId,
    order_id: OrderId,
    product_id: ProductId,
    quantity: i32,
    price: Decimal,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

const SELECT_ORDER: &str = "
    SELECT id, customer_id, status, total, shipping_address, shipping_method,
           shipping_cost, payment_method, payment_status, created_at, updated_at
    FROM shop.orders
";

/// Filters for the order listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<CustomerId>,
}

/// Repository for order management.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List orders, newest first, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn list(&self, filter: OrderFilter) -> Result<Vec<Order>, RepositoryError> {
        let sql = format!(
            "{SELECT_ORDER}
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::uuid IS NULL OR customer_id = $2)
             ORDER BY created_at DESC"
        );
        let rows: Vec<OrderRow> = sqlx::query_as(&sql)
            .bind(filter.status.map(|s| s.to_string()))
            .bind(filter.customer_id)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    /// Get an order with its items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails and
    /// `RepositoryError::DataCorruption` if a row fails validation.
    pub async fn get_with_items(
        &self,
        id: OrderId,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let sql = format!("{SELECT_ORDER} WHERE id = $1");
        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let order = Order::try_from(row)?;

        let items: Vec<OrderItemRow> = sqlx::query_as(
            "SELECT id, order_id, product_id, quantity, price
             FROM shop.order_items
             WHERE order_id = $1
             ORDER BY id",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(OrderWithItems {
            order,
            items: items.into_iter().map(OrderItem::from).collect(),
        }))
    }

    /// Create an order with its items in one transaction.
    ///
    /// Unit prices come from the catalog (sale price when set), stock is
    /// decremented per line, and the total is items plus shipping.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the customer or a product is
    /// unknown, a quantity is not positive, or stock is insufficient.
    pub async fn create(&self, new: &NewOrder) -> Result<OrderWithItems, RepositoryError> {
        if new.items.is_empty() {
            return Err(RepositoryError::Conflict("order has no items".to_owned()));
        }
        if new.items.iter().any(|item| item.quantity <= 0) {
            return Err(RepositoryError::Conflict(
                "item quantity must be positive".to_owned(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let mut items = Vec::with_capacity(new.items.len());
        let mut items_total = Decimal::ZERO;

        for item in &new.items {
            // Lock the product row so concurrent orders cannot oversell.
            let priced: Option<(Decimal, i32)> = sqlx::query_as(
                "SELECT COALESCE(sale_price, price), stock
                 FROM shop.products
                 WHERE id = $1
                 FOR UPDATE",
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some((unit_price, stock)) = priced else {
                return Err(RepositoryError::Conflict(format!(
                    "unknown product {}",
                    item.product_id
                )));
            };
            if stock < item.quantity {
                return Err(RepositoryError::Conflict(format!(
                    "insufficient stock for product {}",
                    item.product_id
                )));
            }

            sqlx::query("UPDATE shop.products SET stock = stock - $2, updated_at = now() WHERE id = $1")
                .bind(item.product_id)
                .bind(item.quantity)
                .execute(&mut *tx)
                .await?;

            items_total += unit_price * Decimal::from(item.quantity);
            items.push((item.product_id, item.quantity, unit_price));
        }

        let total = items_total + new.shipping_cost;

        let order_row: OrderRow = sqlx::query_as(
            "INSERT INTO shop.orders
                 (customer_id, status, total, shipping_address, shipping_method,
                  shipping_cost, payment_method, payment_status)
             VALUES ($1, 'pending', $2, $3, $4, $5, $6, 'pending')
             RETURNING id, customer_id, status, total, shipping_address,
                       shipping_method, shipping_cost, payment_method,
                       payment_status, created_at, updated_at",
        )
        .bind(new.customer_id)
        .bind(total)
        .bind(&new.shipping_address)
        .bind(new.shipping_method.as_deref())
        .bind(new.shipping_cost)
        .bind(new.payment_method.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "unknown customer"))?;

        let order = Order::try_from(order_row)?;

        let mut inserted = Vec::with_capacity(items.len());
        for (product_id, quantity, price) in items {
            let item_row: OrderItemRow = sqlx::query_as(
                "INSERT INTO shop.order_items (order_id, product_id, quantity, price)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, order_id, product_id, quantity, price",
            )
            .bind(order.id)
            .bind(product_id)
            .bind(quantity)
            .bind(price)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(OrderItem::from(item_row));
        }

        tx.commit().await?;

        Ok(OrderWithItems {
            order,
            items: inserted,
        })
    }

    /// Update the fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(
            "UPDATE shop.orders SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, customer_id, status, total, shipping_address,
                       shipping_method, shipping_cost, payment_method,
                       payment_status, created_at, updated_at",
        )
        .bind(id)
        .bind(status.to_string())
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), Order::try_from)
    }

    /// Update the payment status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist.
    pub async fn update_payment_status(
        &self,
        id: OrderId,
        payment_status: PaymentStatus,
    ) -> Result<Order, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(
            "UPDATE shop.orders SET payment_status = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, customer_id, status, total, shipping_address,
                       shipping_method, shipping_cost, payment_method,
                       payment_status, created_at, updated_at",
        )
        .bind(id)
        .bind(payment_status.to_string())
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), Order::try_from)
    }

    /// Count orders and sum revenue for the dashboard.
    ///
    /// Cancelled orders are excluded from revenue.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn stats(&self) -> Result<(i64, Decimal), RepositoryError> {
        let row: (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*),
                    COALESCE(SUM(total) FILTER (WHERE status <> 'cancelled'), 0)
             FROM shop.orders",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
