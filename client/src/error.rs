//! Error types for the shopfront client.

use thiserror::Error;

/// Errors surfaced by the API client and action set.
///
/// Read-path actions (`load_cart`, `load_me`) translate their own failures
/// into safe state transitions instead of returning these; every mutating
/// action propagates them to the caller for display.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connect, read)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-supplied `error` field, or a generic status message
        message: String,
    },

    /// Credentials rejected or authentication missing
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Malformed action input, caught before any network dispatch
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A 2xx body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Startup configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// The durable session store failed
    #[error("Session store error: {0}")]
    Session(String),
}
