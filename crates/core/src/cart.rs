//! The shopping cart state container.
//!
//! Pure state transitions only: every operation is a synchronous mutation of
//! in-memory state with no side effects. The storefront layers persistence
//! on top (apply the transition, then write a snapshot), which keeps the
//! transition logic unit-testable without a storage stub.
//!
//! # Invariants
//!
//! - At most one [`CartLine`] per product id.
//! - A stored line always has `quantity >= 1`; any mutation that would drive
//!   a quantity to zero or below deletes the line instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One product's presence in the cart.
///
/// Display attributes are denormalized from the product at the time it was
/// added, so the cart renders without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to. Unique within the cart.
    pub product_id: ProductId,
    /// Product name at the time of adding.
    pub display_name: String,
    /// Unit price at the time of adding. Never negative.
    pub unit_price: Decimal,
    /// Number of units. Always >= 1 while the line exists.
    pub quantity: u32,
    /// Product image URL.
    pub image_ref: String,
    /// Category name for display grouping.
    pub category_label: String,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The active shopping cart.
///
/// Consumers receive read-only views ([`Cart::lines`], [`Cart::count`],
/// [`Cart::total`]) and route all changes through the mutation operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same product id already exists its quantity is
    /// incremented by 1 and the stored display attributes are kept;
    /// otherwise a new line is inserted with quantity 1. Idempotent on the
    /// identity key, additive on repeats.
    pub fn add(&mut self, item: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                quantity: 1,
                ..item
            }),
        }
    }

    /// Remove a product's line entirely.
    ///
    /// No-op (not an error) if the id is absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero or below removes the line, preserving the
    /// "quantity never persists as <= 0" invariant. No-op if the id is
    /// absent.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            // Negative (or absurdly large) quantities fall out of range;
            // negative means removal, matching the zero case below.
            if quantity <= 0 {
                self.remove(product_id);
            }
            return;
        };

        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Read-only view of the cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn line(id: ProductId, name: &str, price: Decimal) -> CartLine {
        CartLine {
            product_id: id,
            display_name: name.to_owned(),
            unit_price: price,
            quantity: 1,
            image_ref: format!("https://cdn.magi.example/{name}.jpg"),
            category_label: "Lips".to_owned(),
        }
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let id = ProductId::generate();
        let mut cart = Cart::new();

        cart.add(line(id, "Velvet Lip Stain", d("24.99")));
        cart.add(line(id, "Velvet Lip Stain", d("24.99")));
        cart.add(line(id, "Velvet Lip Stain", d("24.99")));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_inserts_with_quantity_one() {
        let id = ProductId::generate();
        let mut cart = Cart::new();

        // Even if the caller hands over a line with a larger quantity,
        // insertion starts at 1.
        let mut item = line(id, "Volumizing Mascara", d("19.99"));
        item.quantity = 5;
        cart.add(item);

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        let mut cart = Cart::new();

        cart.add(line(a, "Velvet Lip Stain", d("24.99")));
        cart.add(line(a, "Velvet Lip Stain", d("24.99")));
        cart.add(line(b, "Cleansing Balm", d("10.00")));

        assert_eq!(cart.total(), d("59.98"));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let id = ProductId::generate();
        let mut cart = Cart::new();
        cart.add(line(id, "Radiant Skin Illuminator", d("32.50")));

        cart.set_quantity(id, 4);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.total(), d("130.00"));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let id = ProductId::generate();
        let mut cart = Cart::new();
        cart.add(line(id, "Luminous Matte Foundation", d("39.99")));

        cart.set_quantity(id, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let id = ProductId::generate();
        let mut cart = Cart::new();
        cart.add(line(id, "Luminous Matte Foundation", d("39.99")));

        cart.set_quantity(id, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let id = ProductId::generate();
        let mut cart = Cart::new();
        cart.add(line(id, "Volumizing Mascara", d("19.99")));

        cart.set_quantity(ProductId::generate(), 7);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let id = ProductId::generate();
        let mut cart = Cart::new();
        cart.add(line(id, "Volumizing Mascara", d("19.99")));

        cart.remove(ProductId::generate());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(line(ProductId::generate(), "A", d("1.00")));
        cart.add(line(ProductId::generate(), "B", d("2.00")));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_cart_aggregates() {
        let cart = Cart::new();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.is_empty());
    }
}
