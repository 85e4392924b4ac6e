//! Bearer credential extraction
//!
//! Reads `Authorization: Bearer <token>` the way browsers and the typed client
//! send it. The scheme is matched case-insensitively.

use axum::http::{HeaderMap, header};

const SCHEME: &str = "Bearer";

/// Extract the raw token from the `Authorization` header.
///
/// Returns `None` when the header is missing, not ASCII, uses another scheme
/// or carries an empty credential.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(
            extract_bearer(&headers("Bearer abc.def.ghi")),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(
            extract_bearer(&headers("bearer abc")),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_rejects_other_schemes_and_empty_tokens() {
        assert_eq!(extract_bearer(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer(&headers("Bearer ")), None);
        assert_eq!(extract_bearer(&headers("Bearer")), None);
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }
}
