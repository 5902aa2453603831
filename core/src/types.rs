//! Domain entities mirrored from the backend wire format.
//!
//! Field names follow the server's JSON (`price_cents`, `image_url`,
//! optional profile fields). All ids are server-assigned integers; the
//! client never fabricates one.

use serde::{Deserialize, Serialize};

/// A registered user's profile.
///
/// Profile fields beyond `email` are optional on the server and may be
/// absent until the user edits their profile. Updates always replace the
/// whole record with the server's response; fields are never merged
/// client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    /// Login email, unique server-side
    pub email: String,
    /// First name
    #[serde(default)]
    pub name: Option<String>,
    /// Last name
    #[serde(default)]
    pub lastname: Option<String>,
    /// Shipping address
    #[serde(default)]
    pub address: Option<String>,
}

/// A catalog product.
///
/// Read-only from the client's perspective; the whole list is replaced on
/// each fetch. `price_cents` is in minor currency units. The defaults exist
/// for display robustness on partial payloads only — a missing price renders
/// as zero, it does not invent value in totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units (cents)
    #[serde(default)]
    pub price_cents: i64,
    /// Image reference
    #[serde(default)]
    pub image_url: String,
}

/// A line in the authenticated user's cart.
///
/// Identity is the server-assigned item id, not the product id. The server
/// merges duplicate product lines by summing quantities, so the client never
/// patches quantities locally — it refetches. `quantity` is at least 1 while
/// the line exists; a request to set it lower becomes a deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Server-assigned line identifier
    pub id: i64,
    /// Denormalized product snapshot; the server may send null for a
    /// product deleted out from under the cart
    #[serde(default)]
    pub product: Option<Product>,
    /// Number of units, >= 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Line subtotal in minor currency units.
    ///
    /// A missing product snapshot contributes zero rather than failing the
    /// whole total.
    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        let price = self.product.as_ref().map_or(0, |p| p.price_cents);
        price * i64::from(self.quantity)
    }
}

/// The authentication session.
///
/// Invariant: `user` is `None` whenever `token` is `None`. Logout clears
/// both together; a restored session holds a token with no user until the
/// profile is fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued at login, if authenticated
    pub token: Option<String>,
    /// Profile of the authenticated user, populated lazily
    pub user: Option<User>,
}

impl Session {
    /// Whether a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Coerces a raw cart payload into typed cart items.
///
/// The cart read path is self-healing: a non-array body yields an empty
/// cart, and individual malformed elements are dropped rather than poisoning
/// the rest of the list.
#[must_use]
pub fn cart_items_from_value(value: serde_json::Value) -> Vec<CartItem> {
    match value {
        serde_json::Value::Array(elements) => elements
            .into_iter()
            .filter_map(|e| serde_json::from_value(e).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // test code may unwrap

    use super::*;
    use serde_json::json;

    #[test]
    fn cart_item_deserializes_server_shape() {
        let item: CartItem = serde_json::from_value(json!({
            "id": 7,
            "user_id": 3,
            "product": {
                "id": 2,
                "title": "Mug",
                "description": "Ceramic",
                "price_cents": 1250,
                "image_url": "mug.png",
                "created_at": "2024-01-01T00:00:00"
            },
            "quantity": 2,
            "created_at": "2024-01-02T00:00:00"
        }))
        .unwrap();

        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.subtotal_cents(), 2500);
    }

    #[test]
    fn cart_item_tolerates_null_product() {
        let item: CartItem =
            serde_json::from_value(json!({ "id": 7, "product": null, "quantity": 3 })).unwrap();

        assert!(item.product.is_none());
        assert_eq!(item.subtotal_cents(), 0);
    }

    #[test]
    fn non_array_payloads_coerce_to_empty() {
        assert!(cart_items_from_value(json!(null)).is_empty());
        assert!(cart_items_from_value(json!("oops")).is_empty());
        assert!(cart_items_from_value(json!({ "error": "boom" })).is_empty());
    }

    #[test]
    fn malformed_elements_are_dropped() {
        let items = cart_items_from_value(json!([
            { "id": 2, "quantity": 1 },
            "not-an-item",
            { "id": 1, "quantity": 4 },
        ]));

        assert_eq!(items.len(), 2);
    }

    #[test]
    fn user_profile_fields_are_optional() {
        let user: User =
            serde_json::from_value(json!({ "id": 1, "email": "a@b.c" })).unwrap();

        assert_eq!(user.email, "a@b.c");
        assert!(user.name.is_none());
        assert!(user.address.is_none());
    }
}
