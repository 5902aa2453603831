//! Durable session (token) persistence.
//!
//! The persisted token is the only durable state in the system; everything
//! else is reconstructed from the server on each load. The trait is read
//! once at store construction, written on session establishment, and
//! cleared on logout.

use crate::error::ClientError;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage for the session token across process restarts.
///
/// An absent token means logged out. Implementations must treat `clear` on
/// an already-absent token as success.
pub trait SessionStore: Send + Sync {
    /// Reads the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when the backing storage cannot be
    /// read.
    fn load(&self) -> Result<Option<String>, ClientError>;

    /// Persists the token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when the token cannot be written.
    fn save(&self, token: &str) -> Result<(), ClientError>;

    /// Removes the persisted token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] when the token cannot be removed.
    fn clear(&self) -> Result<(), ClientError>;
}

/// Token persistence backed by a single file.
///
/// The file holds the bare token string; a missing file reads as `None`.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store reading and writing the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::Session(e.to_string())),
        }
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        std::fs::write(&self.path, token).map_err(|e| ClientError::Session(e.to_string()))
    }

    fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(e.to_string())),
        }
    }
}

/// In-memory token persistence.
///
/// Useful for tests and for embedding the client where nothing should touch
/// the filesystem.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding a token, as if persisted by an
    /// earlier run.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
