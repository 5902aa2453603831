//! State transition events.

use crate::types::{CartItem, Product, User};
use serde::{Deserialize, Serialize};

/// The declared state transitions.
///
/// Events are facts produced by the action set after a successful server
/// call (plus the two local session transitions). The reducer applies each
/// one atomically; there is no other mutation path into the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// The catalog was fetched; replaces `products` wholesale.
    ProductsLoaded(Vec<Product>),

    /// A session became active.
    ///
    /// This single event covers both a fresh login (`user` is `Some`, taken
    /// from the login response) and a session restored from the persisted
    /// token at startup (`user` is `None` until the profile is fetched).
    SessionEstablished {
        /// Bearer token to keep for subsequent calls
        token: String,
        /// Profile, when the server already returned it
        user: Option<User>,
    },

    /// The session ended; clears token, user, and cart together.
    LoggedOut,

    /// The server returned an authoritative profile; replaces
    /// `session.user` wholesale.
    ProfileReplaced(User),

    /// The cart was refetched; replaces `cart_items`, sorted ascending by
    /// item id.
    CartReplaced(Vec<CartItem>),
}
