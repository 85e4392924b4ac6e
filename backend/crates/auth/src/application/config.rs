//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use chrono::Duration;
use platform::token::TokenSigner;

/// Access tokens live for 30 days and are never refreshed.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for HS256 access tokens
    pub token_secret: Vec<u8>,
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: Duration::days(TOKEN_TTL_DAYS),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret.to_vec())
    }

    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret, self.token_ttl)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
