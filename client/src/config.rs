//! Environment-based configuration.

use crate::error::ClientError;
use std::path::PathBuf;

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "SHOPFRONT_BACKEND_URL";

/// Environment variable overriding the token file location.
pub const TOKEN_PATH_VAR: &str = "SHOPFRONT_TOKEN_PATH";

const DEFAULT_TOKEN_FILE: &str = ".shopfront-token";

/// Startup configuration, resolved once.
#[derive(Clone, Debug)]
pub struct ShopfrontConfig {
    /// Backend base URL with no trailing slash, e.g.
    /// `http://localhost:3001/api`
    pub backend_base_url: String,
    /// Location of the persisted session token
    pub token_path: PathBuf,
}

impl ShopfrontConfig {
    /// Builds a configuration from explicit values.
    ///
    /// Trailing slashes are stripped from the base URL so endpoint paths can
    /// be joined with a plain `/`.
    #[must_use]
    pub fn new(backend_base_url: impl Into<String>, token_path: impl Into<PathBuf>) -> Self {
        let backend_base_url = backend_base_url.into();
        Self {
            backend_base_url: backend_base_url.trim_end_matches('/').to_string(),
            token_path: token_path.into(),
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `SHOPFRONT_BACKEND_URL` is required; `SHOPFRONT_TOKEN_PATH` defaults
    /// to `.shopfront-token` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the backend URL is unset or
    /// empty.
    pub fn from_env() -> Result<Self, ClientError> {
        let backend_base_url = std::env::var(BACKEND_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                ClientError::Config(format!("environment variable not set: {BACKEND_URL_VAR}"))
            })?;

        let token_path = std::env::var(TOKEN_PATH_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE), PathBuf::from);

        Ok(Self::new(backend_base_url, token_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ShopfrontConfig::new("http://localhost:3001/api///", "/tmp/token");
        assert_eq!(config.backend_base_url, "http://localhost:3001/api");
    }

    #[test]
    fn bare_url_is_kept_as_is() {
        let config = ShopfrontConfig::new("http://localhost:3001/api", "/tmp/token");
        assert_eq!(config.backend_base_url, "http://localhost:3001/api");
    }
}
