//! Session-backed cart and favorites store.
//!
//! [`CartSession`] is the per-visitor state container: it rehydrates the
//! cart and favorites snapshots from the session once at construction,
//! applies pure transitions from `magi_core`, and mirrors every mutation
//! back to the session as two independently keyed JSON blobs.
//!
//! Persistence is best-effort. A failed snapshot write is logged and never
//! surfaced to the caller; the in-memory state stays authoritative for the
//! rest of the request. A malformed stored blob rehydrates as empty.

use tower_sessions::Session;

use magi_core::{Cart, CartLine, FavoriteSet, ProductId, snapshot};

/// The per-visitor cart/favorites state container.
///
/// Constructed from the request session in each handler; consumers read the
/// derived views and route all changes through the mutation operations.
pub struct CartSession {
    session: Session,
    cart: Cart,
    favorites: FavoriteSet,
}

impl CartSession {
    /// Rehydrate the store from the visitor's session.
    ///
    /// Missing or malformed snapshots yield empty state; this never fails.
    pub async fn load(session: Session) -> Self {
        let cart_blob: Option<String> = session.get(snapshot::CART_KEY).await.ok().flatten();
        let favorites_blob: Option<String> =
            session.get(snapshot::FAVORITES_KEY).await.ok().flatten();

        Self {
            cart: snapshot::decode_cart(cart_blob.as_deref()),
            favorites: snapshot::decode_favorites(favorites_blob.as_deref()),
            session,
        }
    }

    /// Read-only view of the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read-only view of the favorites.
    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Add a product to the cart and persist the snapshot.
    pub async fn add_to_cart(&mut self, line: CartLine) {
        self.cart.add(line);
        self.persist_cart().await;
    }

    /// Remove a product from the cart and persist the snapshot.
    pub async fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
        self.persist_cart().await;
    }

    /// Replace a line's quantity (zero or below removes) and persist.
    pub async fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
        self.persist_cart().await;
    }

    /// Empty the cart and persist.
    pub async fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart().await;
    }

    /// Mark a product as favorite and persist.
    pub async fn add_to_favorites(&mut self, product_id: ProductId) {
        self.favorites.insert(product_id);
        self.persist_favorites().await;
    }

    /// Unmark a product and persist.
    pub async fn remove_from_favorites(&mut self, product_id: ProductId) {
        self.favorites.remove(product_id);
        self.persist_favorites().await;
    }

    /// Write the cart snapshot to the session, best-effort.
    async fn persist_cart(&self) {
        match snapshot::encode(self.cart()) {
            Ok(blob) => {
                if let Err(e) = self.session.insert(snapshot::CART_KEY, blob).await {
                    tracing::warn!("failed to persist cart snapshot: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize cart snapshot: {e}"),
        }
    }

    /// Write the favorites snapshot to the session, best-effort.
    async fn persist_favorites(&self) {
        match snapshot::encode(self.favorites()) {
            Ok(blob) => {
                if let Err(e) = self.session.insert(snapshot::FAVORITES_KEY, blob).await {
                    tracing::warn!("failed to persist favorites snapshot: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize favorites snapshot: {e}"),
        }
    }
}
