//! Required Text Value Object
//!
//! Product names, recipe titles and descriptions. The text is kept as
//! submitted; only the trimmed form has to be non-empty.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    /// `message` is the client-facing text used when the value is blank.
    pub fn new(raw: impl Into<String>, message: &'static str) -> AppResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AppError::bad_request(message));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_text_as_submitted() {
        let text = RequiredText::new(" Apple pie ", "Title is required").unwrap();
        assert_eq!(text.as_str(), " Apple pie ");
    }

    #[test]
    fn test_blank_is_rejected_with_given_message() {
        for raw in ["", "   ", "\t\n"] {
            let err = RequiredText::new(raw, "Name must be a non-empty string").unwrap_err();
            assert_eq!(err.message(), "Name must be a non-empty string");
        }
    }
}
