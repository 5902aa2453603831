//! Side effect descriptions returned by the reducer.
//!
//! The reducer never touches durable storage itself. It returns values
//! describing what the runtime must do, and the store executes them after
//! the state write lock is released.

/// A durable-session side effect to be executed by the store runtime.
///
/// Token persistence is the only durable state in the system; everything
/// else is reconstructed from the server on each load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Write the token to the session store.
    PersistToken(String),
    /// Remove the persisted token.
    ClearToken,
}
