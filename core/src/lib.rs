//! # Shopfront Core
//!
//! Pure domain state for the shopfront client: the state snapshot, the
//! events that mutate it, and the reducer that applies them.
//!
//! This crate performs no I/O. Network calls, session persistence, and the
//! store runtime live in `shopfront-client`; this crate only defines:
//!
//! - **State**: [`StorefrontState`] — session, products, cart items
//! - **Events**: [`StoreEvent`] — the declared state transitions
//! - **Reducer**: [`StorefrontReducer`] — applies an event to state and
//!   returns [`SessionEffect`] descriptions for the runtime to execute
//!
//! ## Example
//!
//! ```
//! use shopfront_core::{
//!     Product, Reducer, StoreEvent, StorefrontReducer, StorefrontState,
//! };
//!
//! let mut state = StorefrontState::new("http://localhost:3001/api");
//! let reducer = StorefrontReducer;
//!
//! let products = vec![Product {
//!     id: 1,
//!     title: "Mug".to_string(),
//!     description: String::new(),
//!     price_cents: 1250,
//!     image_url: String::new(),
//! }];
//! reducer.reduce(&mut state, StoreEvent::ProductsLoaded(products));
//!
//! assert_eq!(state.products.len(), 1);
//! assert_eq!(state.cart_count(), 0);
//! ```

pub mod effect;
pub mod event;
pub mod reducer;
pub mod state;
pub mod types;

pub use effect::SessionEffect;
pub use event::StoreEvent;
pub use reducer::{Reducer, StorefrontReducer};
pub use state::StorefrontState;
pub use types::{cart_items_from_value, CartItem, Product, Session, User};
