//! Fixture builders for domain entities.
//!
//! Each builder produces a small, valid entity keyed off a single id so
//! tests stay readable.

use shopfront_core::{CartItem, Product, User};

/// A catalog product with a price derived from its id.
#[must_use]
pub fn product(id: i64, price_cents: i64) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        description: format!("Description for product {id}"),
        price_cents,
        image_url: format!("https://img.example.com/{id}.png"),
    }
}

/// A cart line holding a denormalized product snapshot.
#[must_use]
pub fn cart_item(id: i64, price_cents: i64, quantity: u32) -> CartItem {
    CartItem {
        id,
        product: Some(product(id * 100, price_cents)),
        quantity,
    }
}

/// A user with all profile fields populated.
#[must_use]
pub fn user(id: i64) -> User {
    User {
        id,
        email: format!("user{id}@example.com"),
        name: Some("Ana".to_string()),
        lastname: Some("García".to_string()),
        address: Some("Calle Mayor 1".to_string()),
    }
}
