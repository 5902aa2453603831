//! HTTP client for the backend REST API.
//!
//! All endpoint methods go through [`ApiClient::execute`], which normalizes
//! transport failures, body parsing, and non-2xx statuses into
//! [`ClientError`] values. The body is always read before an error is
//! raised, so a server-supplied `error` message is never lost.

use crate::error::ClientError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use shopfront_core::{Product, User};

/// Successful response from `POST /login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated calls
    pub access_token: String,
    /// Profile of the user that logged in
    pub user: User,
}

/// Request body for `POST /users`.
///
/// Profile fields are optional at registration time; the server stores
/// whatever subset is present.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterPayload {
    /// Login email (required)
    pub email: String,
    /// Password (required)
    pub password: String,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Shipping address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Request body for `PUT /me`.
///
/// Only fields that are present are sent; the server updates exactly those.
/// An empty `password` must never reach the wire — the action set strips it
/// before calling [`ApiClient::update_me`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Shipping address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Replacement email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement password, only when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Serialize)]
struct AddCartItemBody {
    product_id: i64,
    quantity: u32,
}

#[derive(Serialize)]
struct SetQuantityBody {
    quantity: u32,
}

/// Client for the backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and normalizes the response.
    ///
    /// The body is parsed as JSON only when non-empty and well-formed;
    /// otherwise the raw text is yielded as a JSON string. On a non-2xx
    /// status the error message prefers the body's `error` field, falling
    /// back to `HTTP {status}`; 401 and 403 map to [`ClientError::Auth`].
    ///
    /// # Errors
    ///
    /// [`ClientError::Network`] on transport failure, [`ClientError::Auth`]
    /// or [`ClientError::Http`] on a non-2xx status.
    pub async fn execute(&self, request: RequestBuilder) -> Result<serde_json::Value, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body = if text.is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) => serde_json::Value::String(text),
            }
        };

        if status.is_success() {
            return Ok(body);
        }

        let message = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| format!("HTTP {}", status.as_u16()), ToString::to_string);

        tracing::debug!(status = status.as_u16(), error = %message, "request rejected");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::Auth(message)),
            _ => Err(ClientError::Http {
                status: status.as_u16(),
                message,
            }),
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(
        value: serde_json::Value,
    ) -> Result<T, ClientError> {
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `GET /products` — the full catalog.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`], plus
    /// [`ClientError::Decode`] for an unexpected body shape.
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        let body = self.execute(self.http.get(self.url("/products"))).await?;
        Self::decode(body)
    }

    /// `POST /users` — register a new user.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`]; the server answers
    /// 409 for a duplicate email.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User, ClientError> {
        let body = self
            .execute(self.http.post(self.url("/users")).json(payload))
            .await?;
        Self::decode(body)
    }

    /// `POST /login` — exchange credentials for a token.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`]; invalid
    /// credentials surface as [`ClientError::Auth`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = self
            .execute(
                self.http
                    .post(self.url("/login"))
                    .json(&serde_json::json!({ "email": email, "password": password })),
            )
            .await?;
        Self::decode(body)
    }

    /// `GET /me` — the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`]; an expired or
    /// invalid token surfaces as [`ClientError::Auth`].
    pub async fn me(&self, token: &str) -> Result<User, ClientError> {
        let body = self
            .execute(self.http.get(self.url("/me")).bearer_auth(token))
            .await?;
        Self::decode(body)
    }

    /// `PUT /me` — partial profile update; returns the full updated record.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`].
    pub async fn update_me(
        &self,
        token: &str,
        payload: &ProfileUpdate,
    ) -> Result<User, ClientError> {
        let body = self
            .execute(self.http.put(self.url("/me")).bearer_auth(token).json(payload))
            .await?;
        Self::decode(body)
    }

    /// `GET /cart-items` — the authenticated user's cart, as raw JSON.
    ///
    /// The caller coerces the value to typed items so a malformed body can
    /// degrade to an empty cart instead of an error.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`].
    pub async fn cart_items(&self, token: &str) -> Result<serde_json::Value, ClientError> {
        self.execute(self.http.get(self.url("/cart-items")).bearer_auth(token))
            .await
    }

    /// `POST /cart-items` — add a product line; the server merges duplicate
    /// lines by summing quantities.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`]; an unknown product
    /// answers 404.
    pub async fn add_cart_item(
        &self,
        token: &str,
        product_id: i64,
        quantity: u32,
    ) -> Result<(), ClientError> {
        self.execute(
            self.http
                .post(self.url("/cart-items"))
                .bearer_auth(token)
                .json(&AddCartItemBody {
                    product_id,
                    quantity,
                }),
        )
        .await?;
        Ok(())
    }

    /// `PUT /cart-items/{id}` — set a line's quantity.
    ///
    /// Callers must have already translated non-positive quantities into
    /// deletion; this method only carries positive values.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`].
    pub async fn set_cart_item_quantity(
        &self,
        token: &str,
        item_id: i64,
        quantity: u32,
    ) -> Result<(), ClientError> {
        self.execute(
            self.http
                .put(self.url(&format!("/cart-items/{item_id}")))
                .bearer_auth(token)
                .json(&SetQuantityBody { quantity }),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /cart-items/{id}` — remove a line.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from [`Self::execute`].
    pub async fn delete_cart_item(&self, token: &str, item_id: i64) -> Result<(), ClientError> {
        self.execute(
            self.http
                .delete(self.url(&format!("/cart-items/{item_id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}
