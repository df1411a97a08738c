//! Application Configuration
//!
//! Configuration for the Auth application layer.

use crate::domain::value_object::session_token::{SESSION_TOKEN_PREFIX, SessionTokenScheme};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token prefix (the web client expects `session_`)
    pub token_prefix: String,
    /// HMAC key for signed tokens; `None` keeps the bare `prefix + name` form
    pub token_secret: Option<[u8; 32]>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_prefix: SESSION_TOKEN_PREFIX.to_string(),
            token_secret: None,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config that signs tokens with a random key.
    ///
    /// Tokens issued before a restart stop resolving.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            token_secret: Some(secret),
            ..Default::default()
        }
    }

    pub fn with_token_secret(mut self, secret: Option<[u8; 32]>) -> Self {
        self.token_secret = secret;
        self
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Token scheme described by this config
    pub fn token_scheme(&self) -> SessionTokenScheme {
        SessionTokenScheme::new(self.token_prefix.clone(), self.token_secret)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
