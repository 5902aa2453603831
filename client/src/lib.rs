//! # Shopfront Client
//!
//! The imperative shell around [`shopfront-core`](shopfront_core): the API
//! client that talks to the backend, durable session persistence, and the
//! [`Store`] runtime exposing the async action set.
//!
//! ## Architecture
//!
//! ```text
//! UI ──▶ action (Store method) ──▶ ApiClient ──▶ backend
//!                │ on success
//!                ▼
//!          StoreEvent ──▶ reducer ──▶ new snapshot (+ session effects)
//! ```
//!
//! Actions suspend only at network boundaries; state transitions themselves
//! are synchronous and atomic under the store's write lock. Mutating cart
//! actions refetch the cart afterwards instead of patching locally, so the
//! server's merge logic is always reflected.
//!
//! ## Example
//!
//! ```no_run
//! use shopfront_client::{ShopfrontConfig, Store};
//! use shopfront_client::session::MemorySessionStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), shopfront_client::ClientError> {
//! let config = ShopfrontConfig::new("http://localhost:3001/api", ".shopfront-token");
//! let store = Store::new(&config, Arc::new(MemorySessionStore::new()))?;
//!
//! let products = store.load_products().await?;
//! let user = store.login("ana@example.com", "secret").await?;
//! store.add_to_cart(products[0].id, 1).await?;
//!
//! let total = store.state(|s| s.cart_total_cents()).await;
//! println!("cart total: {total} cents for {}", user.email);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use api::{ApiClient, LoginResponse, ProfileUpdate, RegisterPayload};
pub use config::ShopfrontConfig;
pub use error::ClientError;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use store::Store;
