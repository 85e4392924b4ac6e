//! Search Pattern Value Object
//!
//! Case-insensitive substring search. The user's text is matched
//! literally, so `%` and `_` carry no wildcard meaning.

use kernel::error::app_error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern(String);

impl SearchPattern {
    /// `message` is returned when the pattern is missing or blank.
    pub fn new(raw: Option<String>, message: &'static str) -> AppResult<Self> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Ok(Self(raw)),
            _ => Err(AppError::bad_request(message)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `%text%` for `ILIKE ... ESCAPE '\'`
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(raw: &str) -> SearchPattern {
        SearchPattern::new(Some(raw.to_string()), "required").unwrap()
    }

    #[test]
    fn test_blank_or_missing_rejected() {
        assert!(SearchPattern::new(None, "required").is_err());
        let err = SearchPattern::new(Some("  ".into()), "Title must be a non-empty string").unwrap_err();
        assert_eq!(err.message(), "Title must be a non-empty string");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(pattern("apple").like_pattern(), "%apple%");
        assert_eq!(pattern("50%_off").like_pattern(), r"%50\%\_off%");
        assert_eq!(pattern(r"a\b").like_pattern(), r"%a\\b%");
    }
}
