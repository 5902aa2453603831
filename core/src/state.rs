//! The client state snapshot.

use crate::types::{CartItem, Product, Session};
use serde::{Deserialize, Serialize};

/// The single snapshot of client state.
///
/// Constructed once at store initialization and mutated only through the
/// reducer under the store's write lock, so no partial update is ever
/// observable. Cart items are kept sorted ascending by item id after every
/// cart-replacing event, giving consumers a deterministic render order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontState {
    /// Authentication session
    pub session: Session,
    /// Product catalog, replaced wholesale on each fetch
    pub products: Vec<Product>,
    /// Cart lines, ascending by item id
    pub cart_items: Vec<CartItem>,
    /// Backend base URL, no trailing slash
    pub backend_base_url: String,
}

impl StorefrontState {
    /// Creates an empty, logged-out snapshot for the given backend.
    #[must_use]
    pub fn new(backend_base_url: impl Into<String>) -> Self {
        Self {
            session: Session::default(),
            products: Vec::new(),
            cart_items: Vec::new(),
            backend_base_url: backend_base_url.into(),
        }
    }

    /// Total number of units across all cart lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart_items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total in minor currency units.
    ///
    /// Computed in integer cents so the result is independent of summation
    /// order; conversion to major units happens only at the presentation
    /// boundary via [`Self::cart_total_major`].
    #[must_use]
    pub fn cart_total_cents(&self) -> i64 {
        self.cart_items.iter().map(CartItem::subtotal_cents).sum()
    }

    /// Cart total in major currency units, for display only.
    ///
    /// Integer cents carry the precision; the division happens once, at the
    /// presentation boundary.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cart_total_major(&self) -> f64 {
        self.cart_total_cents() as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn item(id: i64, price_cents: i64, quantity: u32) -> CartItem {
        CartItem {
            id,
            product: Some(Product {
                id: id * 10,
                title: format!("product-{id}"),
                description: String::new(),
                price_cents,
                image_url: String::new(),
            }),
            quantity,
        }
    }

    #[test]
    fn totals_use_integer_minor_units() {
        let mut state = StorefrontState::new("http://localhost:3001/api");
        state.cart_items = vec![item(1, 250, 2), item(2, 999, 1)];

        assert_eq!(state.cart_total_cents(), 1499);
        assert!((state.cart_total_major() - 14.99).abs() < f64::EPSILON);
        assert_eq!(state.cart_count(), 3);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let state = StorefrontState::new("http://localhost:3001/api");

        assert_eq!(state.cart_count(), 0);
        assert_eq!(state.cart_total_cents(), 0);
    }

    #[test]
    fn missing_product_snapshot_contributes_nothing() {
        let mut state = StorefrontState::new("http://localhost:3001/api");
        state.cart_items = vec![
            item(1, 500, 1),
            CartItem {
                id: 2,
                product: None,
                quantity: 4,
            },
        ];

        assert_eq!(state.cart_total_cents(), 500);
        assert_eq!(state.cart_count(), 5);
    }
}
