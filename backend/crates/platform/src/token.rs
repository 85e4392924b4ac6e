//! Signed access tokens
//!
//! Stateless HS256 JWTs. A token names its subject (the user id as a string)
//! and the username it was issued for, and expires after a fixed TTL. There
//! is no server-side revocation list.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies tokens with one shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Sign a token valid from `now` until `now + ttl`.
    pub fn issue_at(
        &self,
        subject: &str,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    pub fn issue(&self, subject: &str, username: &str) -> Result<String, TokenError> {
        self.issue_at(subject, username, Utc::now())
    }

    /// Check signature, algorithm and expiry, then return the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(b"test-secret-test-secret-test-sec", Duration::days(30))
    }

    #[test]
    fn test_issue_and_verify() {
        let signer = signer();
        let token = signer.issue("42", "alice").unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token() {
        let signer = signer();
        let issued = Utc::now() - Duration::days(31);
        let token = signer.issue_at("42", "alice", issued).unwrap();

        assert!(matches!(signer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = signer().issue("42", "alice").unwrap();
        let other = TokenSigner::new(b"another-secret-another-secret-32", Duration::days(30));

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(matches!(
            signer().verify("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let output = format!("{:?}", signer());
        assert!(output.contains("REDACTED"));
        assert!(!output.contains("test-secret"));
    }
}
