//! User Name Value Object
//!
//! The login handle. Unique across users, checked by the repository.
//!
//! ## Invariants
//! - At least 4 characters (Unicode code points)
//! - Not blank

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::bad_request("Username cannot be empty."));
        }

        if raw.chars().count() < USER_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at least {} characters long.",
                USER_NAME_MIN_LENGTH
            )));
        }

        Ok(Self(raw))
    }

    /// Trusted value read back from the store
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
