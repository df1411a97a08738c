//! Session Token Value Object
//!
//! Tokens are derived, never stored: `session_` + user name. With a secret
//! configured an HMAC tag is appended (`session_<name>.<tag>`) and checked on
//! resolve. Neither form expires.

use std::fmt;

use platform::crypto;
use thiserror::Error;

use super::user_name::UserName;

/// Scheme prefix understood by the web client
pub const SESSION_TOKEN_PREFIX: &str = "session_";

const SIGNATURE_SEPARATOR: char = '.';

/// Token does not carry the scheme prefix or its tag does not verify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Malformed session token")]
pub struct MalformedToken;

#[derive(Clone)]
pub struct SessionTokenScheme {
    prefix: String,
    secret: Option<[u8; 32]>,
}

impl Default for SessionTokenScheme {
    fn default() -> Self {
        Self::new(SESSION_TOKEN_PREFIX, None)
    }
}

impl SessionTokenScheme {
    pub fn new(prefix: impl Into<String>, secret: Option<[u8; 32]>) -> Self {
        Self {
            prefix: prefix.into(),
            secret,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// Derive the bearer token for a verified user name
    pub fn issue(&self, user_name: &UserName) -> String {
        let mut token = format!("{}{}", self.prefix, user_name.as_str());
        if let Some(secret) = &self.secret {
            let tag = crypto::hmac_sha256(secret, user_name.as_str().as_bytes());
            token.push(SIGNATURE_SEPARATOR);
            token.push_str(&crypto::to_base64_url(&tag));
        }
        token
    }

    /// Recover the user name embedded in a token
    ///
    /// Pure string work. Whether the name belongs to an account is the
    /// caller's concern.
    pub fn resolve(&self, token: &str) -> Result<String, MalformedToken> {
        let rest = token.strip_prefix(self.prefix.as_str()).ok_or(MalformedToken)?;

        let Some(secret) = &self.secret else {
            return Ok(rest.to_string());
        };

        // User names may contain '.', the tag never does
        let (user_name, tag) = rest.rsplit_once(SIGNATURE_SEPARATOR).ok_or(MalformedToken)?;
        let tag = crypto::from_base64_url(tag).map_err(|_| MalformedToken)?;

        if crypto::verify_hmac_sha256(secret, user_name.as_bytes(), &tag) {
            Ok(user_name.to_string())
        } else {
            Err(MalformedToken)
        }
    }
}

impl fmt::Debug for SessionTokenScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenScheme")
            .field("prefix", &self.prefix)
            .field("signed", &self.is_signed())
            .finish()
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The web client sends the bare token; `Bearer <token>` is accepted too.
pub fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}
