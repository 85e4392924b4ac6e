//! Email Value Object
//!
//! Represents a syntactically plausible email address: `local@domain.tld`
//! with no whitespace anywhere. Deliverability is never checked.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Trim, then validate.
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim();

        if email.is_empty() || email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(email) {
            return Err(AppError::bad_request("Invalid email format."));
        }

        Ok(Self(email.to_string()))
    }

    /// True when `email` splits as `A@B.C` with every part non-empty and
    /// whitespace-free.
    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let chars: Vec<char> = email.chars().collect();
        let Some(at) = chars.iter().skip(1).position(|&c| c == '@').map(|i| i + 1) else {
            return false;
        };

        // A dot with at least one char between it and '@' and one after it.
        chars
            .iter()
            .enumerate()
            .any(|(i, &c)| c == '.' && i >= at + 2 && i + 1 < chars.len())
    }

    /// Trusted value read back from the store
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
