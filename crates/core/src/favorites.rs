//! The favorited-product set.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// The set of product ids a visitor has marked favorite.
///
/// Insertion order is preserved so serialized snapshots stay stable, but
/// membership is the only semantic: inserts are idempotent and removal of an
/// absent id is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Mark a product as favorite. Duplicate adds are ignored.
    pub fn insert(&mut self, product_id: ProductId) {
        if !self.ids.contains(&product_id) {
            self.ids.push(product_id);
        }
    }

    /// Unmark a product. No-op if it was not a favorite.
    pub fn remove(&mut self, product_id: ProductId) {
        self.ids.retain(|id| *id != product_id);
    }

    /// Whether a product is currently favorited.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Number of favorited products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no products are favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Read-only view of the favorited ids, in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let id = ProductId::generate();
        let mut favorites = FavoriteSet::new();

        favorites.insert(id);
        favorites.insert(id);

        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(id));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let id = ProductId::generate();
        let mut favorites = FavoriteSet::new();
        favorites.insert(id);

        favorites.remove(ProductId::generate());
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_insert_then_remove() {
        let id = ProductId::generate();
        let mut favorites = FavoriteSet::new();

        favorites.insert(id);
        favorites.remove(id);

        assert!(favorites.is_empty());
        assert!(!favorites.contains(id));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        let c = ProductId::generate();
        let mut favorites = FavoriteSet::new();

        favorites.insert(a);
        favorites.insert(b);
        favorites.insert(c);
        favorites.insert(a);

        assert_eq!(favorites.ids(), &[a, b, c]);
    }
}
