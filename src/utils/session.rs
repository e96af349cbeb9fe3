//! Visitor session identifiers carried in a cookie.

use axum::http::{HeaderMap, header::COOKIE};
use rand::{Rng, distr::Alphanumeric};

/// Length of freshly minted session identifiers.
pub const SESSION_ID_LENGTH: usize = 40;

/// Upper bound for session identifiers accepted from the client.
const MAX_SESSION_ID_LENGTH: usize = 128;

/// Reads the session identifier from the `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons. Values that are not
/// plain alphanumeric tokens are ignored so that a new id gets minted.
pub fn read_session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == cookie_name).then(|| value.trim().to_string())
        })
        .filter(|value| is_valid_session_id(value))
}

fn is_valid_session_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_SESSION_ID_LENGTH
        && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Generates a random alphanumeric session identifier.
pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Renders the `Set-Cookie` header value for a session identifier.
pub fn session_cookie_header(cookie_name: &str, session_id: &str) -> String {
    format!("{cookie_name}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

/// Returns true if `name` is usable as a cookie name (RFC 6265 token).
pub fn is_valid_cookie_name(name: &str) -> bool {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";

    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_control() && !SEPARATORS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_read_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; click_session=abc123XYZ; lang=en"),
        );

        assert_eq!(
            read_session_cookie(&headers, "click_session"),
            Some("abc123XYZ".to_string())
        );
    }

    #[test]
    fn test_read_session_cookie_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));

        assert!(read_session_cookie(&headers, "click_session").is_none());
        assert!(read_session_cookie(&HeaderMap::new(), "click_session").is_none());
    }

    #[test]
    fn test_read_session_cookie_rejects_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("click_session=<script>"));

        assert!(read_session_cookie(&headers, "click_session").is_none());
    }

    #[test]
    fn test_generate_session_id() {
        let a = generate_session_id();
        let b = generate_session_id();

        assert_eq!(a.len(), SESSION_ID_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_cookie_header() {
        assert_eq!(
            session_cookie_header("click_session", "abc"),
            "click_session=abc; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_cookie_name_validation() {
        assert!(is_valid_cookie_name("click_session"));
        assert!(!is_valid_cookie_name(""));
        assert!(!is_valid_cookie_name("bad name"));
        assert!(!is_valid_cookie_name("a=b"));
    }
}
