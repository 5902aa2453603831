//! The store runtime and the action set.
//!
//! The [`Store`] owns the single state snapshot behind an async `RwLock`,
//! applies events through the reducer under the write lock, and executes
//! the session effects the reducer returns. The async action methods are
//! the only producers of events: each one calls the API client and, on
//! success, dispatches the matching transition.

use crate::api::{ApiClient, ProfileUpdate, RegisterPayload};
use crate::config::ShopfrontConfig;
use crate::error::ClientError;
use crate::session::{FileSessionStore, SessionStore};
use shopfront_core::{
    cart_items_from_value, CartItem, Product, Reducer, SessionEffect, StoreEvent,
    StorefrontReducer, StorefrontState, User,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The store: state snapshot, reducer, API client, and session persistence.
///
/// Cloning is cheap and shares the same snapshot; all clones observe the
/// same state. Mutation happens only through [`Store::dispatch`], which
/// serializes concurrent writers on the state lock, so no partial snapshot
/// is ever observable.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<StorefrontState>>,
    reducer: StorefrontReducer,
    api: ApiClient,
    sessions: Arc<dyn SessionStore>,
}

impl Store {
    /// Creates a store, seeding the session from persisted state.
    ///
    /// When the session store holds a token, the canonical
    /// [`StoreEvent::SessionEstablished`] transition is applied with
    /// `user: None`; the profile is filled in by the first
    /// [`Store::load_me`] call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when the persisted token cannot be
    /// read.
    pub fn new(
        config: &ShopfrontConfig,
        sessions: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        let reducer = StorefrontReducer;
        let mut state = StorefrontState::new(&config.backend_base_url);

        if let Some(token) = sessions.load()? {
            tracing::debug!("restoring session from persisted token");
            let effects = reducer.reduce(&mut state, StoreEvent::SessionEstablished {
                token,
                user: None,
            });
            // Re-persisting the token we just read is harmless.
            run_session_effects(sessions.as_ref(), effects);
        }

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            reducer,
            api: ApiClient::new(&config.backend_base_url),
            sessions,
        })
    }

    /// Creates a store from environment configuration with a file-backed
    /// session store.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for missing configuration and
    /// [`ClientError::Session`] for an unreadable token file.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ShopfrontConfig::from_env()?;
        let sessions = Arc::new(FileSessionStore::new(config.token_path.clone()));
        Self::new(&config, sessions)
    }

    /// Reads current state through a closure.
    ///
    /// ```ignore
    /// let count = store.state(|s| s.cart_count()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&StorefrontState) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Applies an event to the snapshot and executes the resulting session
    /// effects.
    ///
    /// The reducer runs under the write lock; effects run after it is
    /// released. A failing session store is logged and does not fail the
    /// transition — persistence degradation must not poison state.
    pub async fn dispatch(&self, event: StoreEvent) {
        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, event)
        };
        run_session_effects(self.sessions.as_ref(), effects);
    }

    async fn token(&self) -> Option<String> {
        self.state(|s| s.session.token.clone()).await
    }
}

fn run_session_effects(
    sessions: &dyn SessionStore,
    effects: impl IntoIterator<Item = SessionEffect>,
) {
    for effect in effects {
        let result = match &effect {
            SessionEffect::PersistToken(token) => sessions.save(token),
            SessionEffect::ClearToken => sessions.clear(),
        };
        if let Err(error) = result {
            tracing::warn!(%error, ?effect, "session persistence failed");
        }
    }
}

/// The action set.
///
/// Every action follows the same shape: validate preconditions, call the
/// API client, and on success apply one or more events. Mutating cart
/// actions resynchronize by refetching the cart rather than patching
/// locally, trading a round trip for correctness against the server's
/// merge logic.
impl Store {
    /// Loads the product catalog. No authentication required.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the API client.
    #[tracing::instrument(skip(self))]
    pub async fn load_products(&self) -> Result<Vec<Product>, ClientError> {
        let products = self.api.products().await?;
        self.dispatch(StoreEvent::ProductsLoaded(products.clone()))
            .await;
        Ok(products)
    }

    /// Registers a new user. Does not mutate the session; callers are
    /// expected to go through [`Store::login`] afterwards.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] when email or password is empty, before
    /// any network dispatch; otherwise propagates [`ClientError`] from the
    /// API client (409 for a duplicate email).
    #[tracing::instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User, ClientError> {
        if payload.email.trim().is_empty() || payload.password.is_empty() {
            return Err(ClientError::Validation(
                "email and password are required".to_string(),
            ));
        }
        self.api.register(payload).await
    }

    /// Logs in and synchronizes session and cart.
    ///
    /// On success the session transition is applied (persisting the token)
    /// and the cart is loaded from the server before the future resolves.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] on empty credentials;
    /// [`ClientError::Auth`] when the server rejects them, carrying the
    /// server-supplied message when one exists.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let response = self.api.login(email, password).await.map_err(|e| match e {
            // Any rejection of credentials is an auth failure, whatever the
            // exact status.
            ClientError::Http { message, .. } => ClientError::Auth(message),
            other => other,
        })?;

        self.dispatch(StoreEvent::SessionEstablished {
            token: response.access_token,
            user: Some(response.user.clone()),
        })
        .await;

        self.load_cart().await;

        Ok(response.user)
    }

    /// Fetches the authenticated user's profile.
    ///
    /// Returns `Ok(None)` without a network call when no token is present.
    /// A rejected token (expired or invalid) triggers a full logout,
    /// clearing the persisted token — a stale credential is never silently
    /// ignored. Transport failures leave the session untouched.
    ///
    /// # Errors
    ///
    /// This read path self-heals and currently never returns an error; the
    /// `Result` keeps the signature uniform with the other actions.
    #[tracing::instrument(skip(self))]
    pub async fn load_me(&self) -> Result<Option<User>, ClientError> {
        let Some(token) = self.token().await else {
            return Ok(None);
        };

        match self.api.me(&token).await {
            Ok(user) => {
                self.dispatch(StoreEvent::ProfileReplaced(user.clone())).await;
                Ok(Some(user))
            }
            Err(ClientError::Network(error)) => {
                tracing::warn!(%error, "profile fetch failed at transport level");
                Ok(None)
            }
            Err(error) => {
                tracing::info!(%error, "token rejected, clearing session");
                self.dispatch(StoreEvent::LoggedOut).await;
                Ok(None)
            }
        }
    }

    /// Updates the authenticated user's profile.
    ///
    /// An empty `password` field is stripped before dispatch so it can
    /// never overwrite the stored credential. On success the full record
    /// returned by the server replaces the session user.
    ///
    /// # Errors
    ///
    /// [`ClientError::Auth`] when not authenticated; otherwise propagates
    /// [`ClientError`] from the API client.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_me(&self, payload: ProfileUpdate) -> Result<User, ClientError> {
        let Some(token) = self.token().await else {
            return Err(ClientError::Auth("not authenticated".to_string()));
        };

        let mut payload = payload;
        if payload.password.as_deref().is_some_and(str::is_empty) {
            payload.password = None;
        }

        let user = self.api.update_me(&token, &payload).await?;
        self.dispatch(StoreEvent::ProfileReplaced(user.clone())).await;
        Ok(user)
    }

    /// Loads the cart from the server.
    ///
    /// This read path is non-fatal by design: without a token, or on any
    /// fetch failure, the cart degrades to empty rather than surfacing an
    /// error. Malformed bodies coerce to the empty list.
    #[tracing::instrument(skip(self))]
    pub async fn load_cart(&self) -> Vec<CartItem> {
        let Some(token) = self.token().await else {
            self.dispatch(StoreEvent::CartReplaced(Vec::new())).await;
            return Vec::new();
        };

        let items = match self.api.cart_items(&token).await {
            Ok(body) => cart_items_from_value(body),
            Err(error) => {
                tracing::warn!(%error, "cart fetch failed, degrading to empty");
                Vec::new()
            }
        };

        self.dispatch(StoreEvent::CartReplaced(items.clone())).await;
        items
    }

    /// Adds a product to the cart, then resynchronizes.
    ///
    /// The server merges duplicate product lines by summing quantities, so
    /// the refetched cart — not an optimistic local append — is what lands
    /// in state.
    ///
    /// # Errors
    ///
    /// [`ClientError::Auth`] when not authenticated;
    /// [`ClientError::Validation`] for a zero quantity; otherwise
    /// propagates [`ClientError`] from the API client.
    #[tracing::instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        product_id: i64,
        quantity: u32,
    ) -> Result<Vec<CartItem>, ClientError> {
        let Some(token) = self.token().await else {
            return Err(ClientError::Auth("not authenticated".to_string()));
        };
        if quantity == 0 {
            return Err(ClientError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        self.api.add_cart_item(&token, product_id, quantity).await?;
        Ok(self.load_cart().await)
    }

    /// Sets a cart line's quantity, then resynchronizes.
    ///
    /// A quantity of zero or less is translated into deletion of the item;
    /// a non-positive quantity is never sent to the server.
    ///
    /// # Errors
    ///
    /// [`ClientError::Auth`] when not authenticated; otherwise propagates
    /// [`ClientError`] from the API client.
    #[tracing::instrument(skip(self))]
    pub async fn set_cart_item_quantity(
        &self,
        item_id: i64,
        quantity: i64,
    ) -> Result<Vec<CartItem>, ClientError> {
        if quantity <= 0 {
            return self.remove_cart_item(item_id).await;
        }

        let Some(token) = self.token().await else {
            return Err(ClientError::Auth("not authenticated".to_string()));
        };

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.api
            .set_cart_item_quantity(&token, item_id, quantity)
            .await?;
        Ok(self.load_cart().await)
    }

    /// Removes a cart line, then resynchronizes.
    ///
    /// # Errors
    ///
    /// [`ClientError::Auth`] when not authenticated; otherwise propagates
    /// [`ClientError`] from the API client.
    #[tracing::instrument(skip(self))]
    pub async fn remove_cart_item(&self, item_id: i64) -> Result<Vec<CartItem>, ClientError> {
        let Some(token) = self.token().await else {
            return Err(ClientError::Auth("not authenticated".to_string()));
        };

        self.api.delete_cart_item(&token, item_id).await?;
        Ok(self.load_cart().await)
    }

    /// Ends the session. Applies the logout transition synchronously; no
    /// network call is made.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) {
        self.dispatch(StoreEvent::LoggedOut).await;
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
