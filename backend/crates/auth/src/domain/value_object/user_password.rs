//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Registration and updates go
//! through [`RawPassword::new`], which enforces the length policy; login
//! candidates go through [`RawPassword::candidate`], which does not.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Clear text from a request body, zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("Password must be at least {} characters long.", min))
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Password typed at login. Never rejected, only verified.
    pub fn candidate(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string as stored in `users.password`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_policy() {
        assert!(RawPassword::new("secret1".to_string()).is_ok());

        let err = RawPassword::new("12345".to_string()).unwrap_err();
        assert_eq!(err.message(), "Password must be at least 6 characters long.");

        assert!(RawPassword::new("".to_string()).is_err());
        assert!(RawPassword::new("      ".to_string()).is_ok());
        assert!(RawPassword::new("a".repeat(129)).is_ok());
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert_ne!(hashed.as_phc_string(), "secret1");
        assert!(hashed.verify(&raw, None));
    }

    #[test]
    fn test_candidate_verification() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();

        assert!(hashed.verify(&RawPassword::candidate("secret1".to_string()), Some(b"pepper")));
        assert!(!hashed.verify(&RawPassword::candidate("secret2".to_string()), Some(b"pepper")));
        assert!(!hashed.verify(&RawPassword::candidate("secret1".to_string()), None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("secret1"));

        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(format!("{:?}", hashed).contains("[HASH]"));
    }
}
